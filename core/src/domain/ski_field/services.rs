use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ski_field::{
        entities::{NormalizedSkiField, SkiField},
        ports::{SkiFieldRepository, SkiFieldService, SkiFieldStore},
        query::SkiFieldQuery,
        value_objects::{
            CreateSkiFieldInput, DeleteSkiFieldInput, FindManyRequest, PaginatedResult,
            SkiFieldResponse, UpdateSkiFieldInput,
        },
    },
};

impl<S, HC> SkiFieldService for Service<S, HC>
where
    S: SkiFieldStore,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(name = %input.fields.name))]
    async fn create_ski_field(
        &self,
        input: CreateSkiFieldInput,
    ) -> Result<SkiFieldResponse, CoreError> {
        let fields = NormalizedSkiField::try_from_input(input.fields)?;

        let repository = self.ski_field_store.begin().await?;

        if repository.exists_by_name(&fields.name).await? {
            return Err(CoreError::NameAlreadyExists(fields.name));
        }

        let created = repository.add(SkiField::new(fields)).await?;
        repository.commit().await?;

        info!(uid = %created.uid, "ski field created");

        Ok(SkiFieldResponse::from(created))
    }

    #[instrument(skip(self, input), fields(uid = %input.uid))]
    async fn update_ski_field(
        &self,
        input: UpdateSkiFieldInput,
    ) -> Result<SkiFieldResponse, CoreError> {
        let repository = self.ski_field_store.begin().await?;

        let mut ski_field = repository
            .get_by_uid(&input.uid)
            .await?
            .ok_or_else(|| CoreError::NotFound(input.uid.clone()))?;

        let fields = NormalizedSkiField::try_from_input(input.fields)?;

        if !ski_field.has_name(&fields.name) && repository.exists_by_name(&fields.name).await? {
            return Err(CoreError::NameAlreadyExists(fields.name));
        }

        ski_field.update(fields);

        let updated = repository.update(ski_field).await?;
        repository.commit().await?;

        Ok(SkiFieldResponse::from(updated))
    }

    #[instrument(skip(self, input), fields(uid = %input.uid))]
    async fn delete_ski_field(&self, input: DeleteSkiFieldInput) -> Result<(), CoreError> {
        let repository = self.ski_field_store.begin().await?;

        let ski_field = repository
            .get_by_uid(&input.uid)
            .await?
            .ok_or(CoreError::NotFound(input.uid))?;

        repository.delete(&ski_field).await?;
        repository.commit().await?;

        info!(uid = %ski_field.uid, "ski field deleted");

        Ok(())
    }

    #[instrument(skip(self, request))]
    async fn query_ski_fields(
        &self,
        request: FindManyRequest,
    ) -> Result<PaginatedResult<SkiFieldResponse>, CoreError> {
        let query = SkiFieldQuery::from_request(request);

        let repository = self.ski_field_store.begin().await?;

        let total_count = repository.count(&query.filter).await?;
        let items = repository
            .query(&query)
            .await?
            .into_iter()
            .map(SkiFieldResponse::from)
            .collect();

        repository.commit().await?;

        Ok(PaginatedResult { items, total_count })
    }
}
