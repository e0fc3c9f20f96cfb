pub mod model;
mod orm;
mod schema;

use sea_orm::DatabaseConnection;

#[rustfmt::skip]
pub use {
    orm::OrmRepo,
    schema::initialize_schema,
};

#[cfg_attr(not(test), derive(Clone))]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(dburl: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(dburl).await?;
        Ok(Self { connection })
    }

    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    #[cfg(test)]
    pub fn into_connection(self) -> DatabaseConnection {
        self.connection
    }
}
