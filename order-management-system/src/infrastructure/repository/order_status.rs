use async_trait::async_trait;
use domain_order::{
    model::{
        entity::OrderStatus,
        vo::{ReferenceSet, TranslationMapping, UtilityScope},
    },
    repository::OrderStatusRepo,
};
use sea_orm::{prelude::*, QueryOrder};

use super::scope_condition;
use crate::infrastructure::database::{model::order_status, OrmRepo};

#[async_trait]
impl OrderStatusRepo for OrmRepo {
    async fn get_all_order_statuses(
        &self,
        scope: &UtilityScope,
        translation: &TranslationMapping,
    ) -> anyhow::Result<ReferenceSet<OrderStatus>> {
        let order_statuses = order_status::Entity::find()
            .filter(scope_condition(order_status::Column::UtilityId, scope))
            .order_by_asc(order_status::Column::OrderStatusId)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(OrderStatus::from)
            .collect::<ReferenceSet<_>>();
        Ok(order_statuses.translate(translation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::test_utils;

    #[tokio::test]
    async fn test_untranslated_when_mapping_empty() {
        let repo = test_utils::repo(test_utils::postgres().append_query_results([vec![
            order_status::Model {
                order_status_id: 1,
                name: "New".to_string(),
                description: Some("The order has been created.".to_string()),
                utility_id: None,
            },
        ]]));

        let order_statuses = repo
            .get_all_order_statuses(&UtilityScope::Global, &TranslationMapping::new())
            .await
            .unwrap();

        assert_eq!(order_statuses.display_row(&1).as_deref(), Some("New"));
    }
}
