use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::{ConnectionTrait, Statement, TransactionTrait};
use tokio::sync::Mutex;
use typed_builder::TypedBuilder;

use super::Database;

/// Unit of work over the database, created for each request.
///
/// Inserts are queued as statements and executed in one transaction by
/// [`OrmRepo::save_changed`]. Reads go straight to the connection.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    pub statements: Arc<Mutex<Vec<Statement>>>,
    #[builder(default = AtomicBool::new(true))]
    pub can_drop: AtomicBool,
}

impl OrmRepo {
    pub async fn push_statement(&self, statement: Statement) {
        self.statements.lock().await.push(statement);
        self.can_drop.store(false, Ordering::Relaxed);
    }

    /// Executes the queued statements in one transaction.
    ///
    /// Returns whether there was anything to save.
    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        if self.can_drop.load(Ordering::Relaxed) {
            return Ok(false);
        }
        let mut stmts = self.statements.lock().await;
        let trans = self.db.get_connection().begin().await?;
        for stmt in stmts.iter() {
            if let Err(e) = trans.execute(stmt.clone()).await {
                trans.rollback().await?;
                stmts.clear();
                self.can_drop.store(true, Ordering::Relaxed);
                anyhow::bail!(e);
            }
        }
        if let Err(e) = trans.commit().await {
            stmts.clear();
            self.can_drop.store(true, Ordering::Relaxed);
            anyhow::bail!(e);
        }
        self.can_drop.store(true, Ordering::Relaxed);
        stmts.clear();
        Ok(true)
    }

    /// Discards the queued statements.
    pub async fn rollback(&self) -> anyhow::Result<()> {
        let mut stmts = self.statements.lock().await;
        if !stmts.is_empty() {
            tracing::debug!("Discarding {} queued statements.", stmts.len());
        }
        stmts.clear();
        self.can_drop.store(true, Ordering::Relaxed);
        Ok(())
    }
}

impl Drop for OrmRepo {
    fn drop(&mut self) {
        if self.can_drop.load(Ordering::Relaxed) {
            return;
        }
        if let Ok(stmts) = self.statements.try_lock() {
            let sqls = stmts.iter().map(|x| x.to_string()).collect::<Vec<String>>().join("\n");
            tracing::trace!("Unused sql statements:\n{sqls}")
        }
    }
}
