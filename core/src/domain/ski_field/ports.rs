use crate::domain::{
    common::entities::app_errors::CoreError,
    ski_field::{
        entities::SkiField,
        query::SkiFieldQuery,
        value_objects::{
            CreateSkiFieldInput, DeleteSkiFieldInput, FindManyRequest, PaginatedResult,
            SkiFieldFilter, SkiFieldResponse, UpdateSkiFieldInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SkiFieldService: Send + Sync {
    fn create_ski_field(
        &self,
        input: CreateSkiFieldInput,
    ) -> impl Future<Output = Result<SkiFieldResponse, CoreError>> + Send;

    fn update_ski_field(
        &self,
        input: UpdateSkiFieldInput,
    ) -> impl Future<Output = Result<SkiFieldResponse, CoreError>> + Send;

    fn delete_ski_field(
        &self,
        input: DeleteSkiFieldInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn query_ski_fields(
        &self,
        request: FindManyRequest,
    ) -> impl Future<Output = Result<PaginatedResult<SkiFieldResponse>, CoreError>> + Send;
}

/// Opens units of work against the ski field table.
pub trait SkiFieldStore: Clone + Send + Sync + 'static {
    type Repository: SkiFieldRepository;

    fn begin(&self) -> impl Future<Output = Result<Self::Repository, CoreError>> + Send;
}

/// One unit of work. Writes become visible to other units only after
/// [`SkiFieldRepository::commit`]; dropping the repository discards them.
pub trait SkiFieldRepository: Send + Sync + Sized {
    /// Case-insensitive name lookup.
    fn exists_by_name(&self, name: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn get_by_uid(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<Option<SkiField>, CoreError>> + Send;

    /// Inserts a new record and returns it with its storage key assigned.
    /// A name clash with an existing record is reported as
    /// [`CoreError::NameAlreadyExists`].
    fn add(&self, ski_field: SkiField)
    -> impl Future<Output = Result<SkiField, CoreError>> + Send;

    fn update(
        &self,
        ski_field: SkiField,
    ) -> impl Future<Output = Result<SkiField, CoreError>> + Send;

    fn delete(&self, ski_field: &SkiField) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn count(&self, filter: &SkiFieldFilter)
    -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn query(
        &self,
        query: &SkiFieldQuery,
    ) -> impl Future<Output = Result<Vec<SkiField>, CoreError>> + Send;

    fn commit(self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
