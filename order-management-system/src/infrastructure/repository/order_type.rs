use async_trait::async_trait;
use domain_order::{
    model::{
        entity::OrderType,
        vo::{ReferenceSet, TranslationMapping, UtilityScope},
    },
    repository::OrderTypeRepo,
};
use sea_orm::{prelude::*, QueryOrder, Select};

use super::scope_condition;
use crate::infrastructure::database::{model::order_type, OrmRepo};

fn scoped(scope: &UtilityScope) -> Select<order_type::Entity> {
    order_type::Entity::find()
        .filter(scope_condition(order_type::Column::UtilityId, scope))
        .order_by_asc(order_type::Column::OrderTypeId)
}

#[async_trait]
impl OrderTypeRepo for OrmRepo {
    async fn get_all_order_types(
        &self,
        scope: &UtilityScope,
        translation: &TranslationMapping,
    ) -> anyhow::Result<ReferenceSet<OrderType>> {
        let order_types = scoped(scope)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(OrderType::from)
            .collect::<ReferenceSet<_>>();
        Ok(order_types.translate(translation))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::infrastructure::repository::test_utils;

    #[test]
    fn test_global_scope_query() {
        let sql = scoped(&UtilityScope::Global).build(DbBackend::Postgres).to_string();

        assert!(sql.ends_with(
            r#"WHERE "order_type"."utility_id" IS NULL ORDER BY "order_type"."order_type_id" ASC"#
        ));
    }

    #[test]
    fn test_utility_scope_query() {
        let sql = scoped(&UtilityScope::new([2, 1])).build(DbBackend::Postgres).to_string();

        assert!(sql.contains(
            r#"WHERE "order_type"."utility_id" IN (1, 2) OR "order_type"."utility_id" IS NULL"#
        ));
    }

    #[tokio::test]
    async fn test_translates_labels() {
        let repo = test_utils::repo(test_utils::postgres().append_query_results([vec![
            order_type::Model {
                order_type_id: 1,
                name: "Meter change".to_string(),
                description: None,
                utility_id: None,
            },
            order_type::Model {
                order_type_id: 5,
                name: "Sealing".to_string(),
                description: None,
                utility_id: Some(1),
            },
        ]]));
        let translation = TranslationMapping::from([(1, "Mätarbyte".to_string())]);

        let order_types = repo
            .get_all_order_types(&UtilityScope::new([1]), &translation)
            .await
            .unwrap();

        assert_eq!(order_types.ids(), vec![1, 5]);
        assert_eq!(order_types.display_row(&1).as_deref(), Some("Mätarbyte"));
        assert_eq!(order_types.display_row(&5).as_deref(), Some("Sealing"));
    }
}
