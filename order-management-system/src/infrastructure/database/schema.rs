use sea_orm::{
    sea_query::OnConflict, ConnectionTrait, DbBackend, EntityTrait, QueryTrait, Schema, Set,
    Statement,
};

use super::{model::*, Database};

/// Default utilities, the names are overridden by the translations.
const UTILITIES: [(i32, &str, &str); 2] = [
    (1, "Electricity", "Electricity distribution."),
    (2, "District heating", "District heating distribution."),
];

const ORDER_TYPES: [(i32, &str); 4] = [
    (1, "Meter change"),
    (2, "Meter inspection"),
    (3, "Connection"),
    (4, "Disconnection"),
];

const ORDER_STATUSES: [(i32, &str); 5] = [
    (1, "New"),
    (2, "Planned"),
    (3, "In progress"),
    (4, "Completed"),
    (5, "Cancelled"),
];

fn create_statements(backend: DbBackend) -> Vec<Statement> {
    let schema = Schema::new(backend);
    let mut tables = vec![
        schema.create_table_from_entity(prelude::Utility),
        schema.create_table_from_entity(prelude::OrderType),
        schema.create_table_from_entity(prelude::OrderStatus),
        schema.create_table_from_entity(prelude::Facility),
        schema.create_table_from_entity(prelude::Checklist),
        schema.create_table_from_entity(prelude::Location),
        schema.create_table_from_entity(prelude::User),
        schema.create_table_from_entity(prelude::Order),
    ];
    tables
        .iter_mut()
        .map(|table| backend.build(table.if_not_exists()))
        .collect()
}

fn seed_statements(backend: DbBackend) -> Vec<Statement> {
    let utilities = UTILITIES.iter().map(|(id, name, description)| utility::ActiveModel {
        utility_id: Set(*id),
        name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
    });
    let order_types = ORDER_TYPES.iter().map(|(id, name)| order_type::ActiveModel {
        order_type_id: Set(*id),
        name: Set(name.to_string()),
        description: Set(None),
        utility_id: Set(None),
    });
    let order_statuses = ORDER_STATUSES.iter().map(|(id, name)| order_status::ActiveModel {
        order_status_id: Set(*id),
        name: Set(name.to_string()),
        description: Set(None),
        utility_id: Set(None),
    });

    vec![
        utility::Entity::insert_many(utilities)
            .on_conflict(OnConflict::column(utility::Column::UtilityId).do_nothing().to_owned())
            .build(backend),
        order_type::Entity::insert_many(order_types)
            .on_conflict(
                OnConflict::column(order_type::Column::OrderTypeId).do_nothing().to_owned(),
            )
            .build(backend),
        order_status::Entity::insert_many(order_statuses)
            .on_conflict(
                OnConflict::column(order_status::Column::OrderStatusId).do_nothing().to_owned(),
            )
            .build(backend),
    ]
}

/// Creates the missing tables and inserts the default reference rows that are not there yet.
pub async fn initialize_schema(db: &Database) -> anyhow::Result<()> {
    let connection = db.get_connection();
    let backend = connection.get_database_backend();
    for stmt in create_statements(backend).into_iter().chain(seed_statements(backend)) {
        connection.execute(stmt).await?;
    }
    tracing::info!("Database schema initialized.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_statements() {
        let sqls = create_statements(DbBackend::Postgres)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        assert_eq!(sqls.len(), 8);
        assert!(sqls.iter().all(|el| el.starts_with("CREATE TABLE IF NOT EXISTS")));
        assert!(sqls[7].contains(r#""order""#));
        assert!(sqls[7].contains(r#""order_id" serial"#));
    }

    #[test]
    fn test_seed_does_not_overwrite() {
        let sqls = seed_statements(DbBackend::Postgres)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        assert!(sqls.iter().all(|el| el.contains("ON CONFLICT") && el.contains("DO NOTHING")));
        assert!(sqls[0].contains("'District heating'"));
        assert!(sqls[2].contains("'Cancelled'"));
    }
}
