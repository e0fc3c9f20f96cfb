use async_trait::async_trait;
use domain_order::{
    model::entity::Order,
    repository::{MutableRepository, OrderRepo},
};
use sea_orm::{prelude::*, ActiveValue::NotSet, QueryTrait, Set};

use crate::infrastructure::database::{model::order, OrmRepo};

impl OrderRepo for OrmRepo {}

#[async_trait]
impl MutableRepository<Order> for OrmRepo {
    async fn insert(&self, entity: &Order) -> anyhow::Result<()> {
        let active_model = order::ActiveModel {
            order_id: NotSet,
            order_type_id: Set(entity.order_type_id),
            order_status_id: Set(entity.order_status_id),
            facility_id: Set(entity.facility_id),
            location_id: Set(entity.location_id),
            checklist_id: Set(entity.checklist_id),
            technician_id: Set(entity.technician_id.to_owned()),
            ext_id: Set(entity.ext_id.to_owned()),
            scheduled_start_at: Set(entity.scheduled_start_at),
            scheduled_end_at: Set(entity.scheduled_end_at),
            created_by: Set(entity.created_by.to_owned()),
            created_at: Set(entity.created_at),
        };
        let stmt = order::Entity::insert(active_model)
            .build(self.db.get_connection().get_database_backend());
        self.push_statement(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }

    async fn rollback(&self) -> anyhow::Result<()> {
        self.rollback().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use sea_orm::{DbErr, MockExecResult};

    use super::*;
    use crate::infrastructure::{
        database::Database,
        repository::test_utils,
    };

    fn order() -> Order {
        Order {
            order_id: None,
            order_type_id: 1,
            order_status_id: 2,
            facility_id: Some(3),
            location_id: None,
            checklist_id: None,
            technician_id: Some("tech-1".to_string()),
            ext_id: Some("WO-1".to_string()),
            scheduled_start_at: Some(Utc.with_ymd_and_hms(2024, 5, 2, 6, 0, 0).unwrap()),
            scheduled_end_at: Some(Utc.with_ymd_and_hms(2024, 5, 2, 7, 0, 0).unwrap()),
            created_by: Some("user-1".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_is_queued_until_saved() {
        let db = Arc::new(Database::from_connection(
            test_utils::postgres()
                .append_exec_results([MockExecResult {
                    last_insert_id: 1,
                    rows_affected: 1,
                }])
                .into_connection(),
        ));
        let repo = OrmRepo::builder().db(db.clone()).build();

        MutableRepository::insert(&repo, &order()).await.unwrap();
        assert_eq!(repo.statements.lock().await.len(), 1);
        let sql = repo.statements.lock().await[0].to_string();
        assert!(sql.starts_with(r#"INSERT INTO "order""#));
        assert!(sql.contains("'WO-1'"));

        assert!(MutableRepository::save_changed(&repo).await.unwrap());
        assert!(repo.statements.lock().await.is_empty());
        assert!(!MutableRepository::save_changed(&repo).await.unwrap());

        drop(repo);
        let log = Arc::try_unwrap(db)
            .ok()
            .unwrap()
            .into_connection()
            .into_transaction_log();
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_statement_rolls_back() {
        let repo = test_utils::repo(
            test_utils::postgres()
                .append_exec_errors([DbErr::Custom("duplicate key value".to_string())]),
        );

        MutableRepository::insert(&repo, &order()).await.unwrap();
        let result = MutableRepository::save_changed(&repo).await;

        assert!(result.unwrap_err().to_string().contains("duplicate key value"));
        assert!(repo.statements.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_rollback_discards_queue() {
        let repo = test_utils::repo(test_utils::postgres());

        MutableRepository::insert(&repo, &order()).await.unwrap();
        MutableRepository::rollback(&repo).await.unwrap();

        assert!(repo.statements.lock().await.is_empty());
        assert!(!MutableRepository::save_changed(&repo).await.unwrap());
    }
}
