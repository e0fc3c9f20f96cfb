use async_trait::async_trait;
use domain_order::{
    model::{
        entity::Facility,
        vo::{ReferenceSet, UtilityScope},
    },
    repository::FacilityRepo,
};
use sea_orm::{prelude::*, QueryOrder, Select};

use super::scope_condition;
use crate::infrastructure::database::{model::facility, OrmRepo};

fn scoped(scope: &UtilityScope) -> Select<facility::Entity> {
    facility::Entity::find()
        .filter(scope_condition(facility::Column::UtilityId, scope))
        .order_by_asc(facility::Column::FacilityId)
}

#[async_trait]
impl FacilityRepo for OrmRepo {
    async fn get_all_facilities(
        &self,
        scope: &UtilityScope,
    ) -> anyhow::Result<ReferenceSet<Facility>> {
        Ok(scoped(scope)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Facility::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::infrastructure::repository::test_utils;

    #[test]
    fn test_utility_scope_query() {
        let sql = scoped(&UtilityScope::new([3])).build(DbBackend::Postgres).to_string();

        assert!(sql.contains(
            r#"WHERE "facility"."utility_id" IN (3) OR "facility"."utility_id" IS NULL"#
        ));
    }

    #[tokio::test]
    async fn test_display_label() {
        let repo = test_utils::repo(test_utils::postgres().append_query_results([vec![
            facility::Model {
                facility_id: 1,
                ean: 735999000000000017,
                address: "Storgatan 1".to_string(),
                utility_id: Some(3),
            },
        ]]));

        let facilities = repo.get_all_facilities(&UtilityScope::new([3])).await.unwrap();

        assert_eq!(
            facilities.display_row(&1).as_deref(),
            Some("735999000000000017 | Storgatan 1")
        );
    }
}
