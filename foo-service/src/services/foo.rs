use crate::models::{BarData, FooData};
use crate::services::metrics::{record_lookup, record_save};
use crate::services::repository::FooRepository;
use futures::TryStreamExt;
use service_core::error::AppError;
use std::sync::Arc;

/// Business layer over a [`FooRepository`].
///
/// Only an absent record is translated (into [`AppError::NotFound`]); store
/// errors pass through untouched so the caller decides how to surface them.
#[derive(Clone)]
pub struct FooService {
    repository: Arc<dyn FooRepository>,
}

impl FooService {
    pub fn new(repository: Arc<dyn FooRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn FooRepository> {
        &self.repository
    }

    pub async fn get_foo_data(&self, id: &str) -> Result<FooData, AppError> {
        match self.repository.find_by_id(id).await? {
            Some(foo) => {
                record_lookup("found");
                Ok(foo)
            }
            None => {
                record_lookup("not_found");
                tracing::debug!(foo_id = %id, "Foo record not found");
                Err(AppError::NotFound(anyhow::anyhow!(
                    "Foo record '{}' not found",
                    id
                )))
            }
        }
    }

    /// Drains the repository stream into a list.
    pub async fn get_all_the_foos(&self, ids: &[String]) -> Result<Vec<FooData>, AppError> {
        self.repository
            .find_all_by_id_in(ids)
            .await?
            .try_collect()
            .await
    }

    pub async fn get_all_the_foos_as_bars(
        &self,
        ids: &[String],
    ) -> Result<Vec<BarData>, AppError> {
        self.repository
            .find_all_by_id_in(ids)
            .await?
            .map_ok(BarData::from)
            .try_collect()
            .await
    }

    /// Emits one log event per matching record.
    pub async fn print_the_foos(&self, ids: &[String]) -> Result<(), AppError> {
        self.repository
            .find_all_by_id_in(ids)
            .await?
            .try_for_each(|foo| async move {
                tracing::info!(foo_id = %foo.id, value = %foo.value, "Foo record");
                Ok(())
            })
            .await
    }

    pub async fn save_foo_data(&self, foo: FooData) -> Result<FooData, AppError> {
        let saved = self.repository.save(foo).await?;
        record_save();
        tracing::info!(foo_id = %saved.id, "Foo record saved");
        Ok(saved)
    }
}
