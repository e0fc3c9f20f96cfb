use async_trait::async_trait;

use super::MutableRepository;
use crate::model::entity::Order;

#[async_trait]
pub trait OrderRepo: MutableRepository<Order> + Send + Sync {}
