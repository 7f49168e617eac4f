use crate::domain::{health::ports::HealthCheckRepository, ski_field::ports::SkiFieldStore};

#[derive(Clone)]
pub struct Service<S, HC>
where
    S: SkiFieldStore,
    HC: HealthCheckRepository,
{
    pub(crate) ski_field_store: S,
    pub(crate) health_check_repository: HC,
}

impl<S, HC> Service<S, HC>
where
    S: SkiFieldStore,
    HC: HealthCheckRepository,
{
    pub fn new(ski_field_store: S, health_check_repository: HC) -> Self {
        Self {
            ski_field_store,
            health_check_repository,
        }
    }
}
