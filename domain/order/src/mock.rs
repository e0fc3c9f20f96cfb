use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::{
    command::CreateOrderCommand,
    exception::OrderResult,
    model::{
        entity::{Checklist, Facility, Location, Order, OrderStatus, OrderType, User, Utility},
        vo::{
            DatabaseTranslation, FormReferences, FormSubmission, Language, OperationResult,
            OrderFormView, Permission, ReferenceSet, SessionContext, TranslationBundle,
            TranslationMapping, UtilityScope,
        },
    },
    repository::{
        ChecklistRepo, FacilityRepo, LocationRepo, MutableRepository, OrderRepo, OrderStatusRepo,
        OrderTypeRepo, UserRepo, UtilityRepo,
    },
    service::{
        OrderFormService, OrderSubmissionService, PermissionService, ReferenceDataService,
        TranslationService,
    },
};

mock! {
    pub OrderRepo {}
    impl OrderRepo for OrderRepo {}
    #[async_trait]
    impl MutableRepository<Order> for OrderRepo {
        async fn insert(&self, entity: &Order) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
        async fn rollback(&self) -> anyhow::Result<()>;
    }
}

mock! {
    pub OrderTypeRepo {}
    #[async_trait]
    impl OrderTypeRepo for OrderTypeRepo {
        async fn get_all_order_types(
            &self,
            scope: &UtilityScope,
            translation: &TranslationMapping,
        ) -> anyhow::Result<ReferenceSet<OrderType>>;
    }
}

mock! {
    pub OrderStatusRepo {}
    #[async_trait]
    impl OrderStatusRepo for OrderStatusRepo {
        async fn get_all_order_statuses(
            &self,
            scope: &UtilityScope,
            translation: &TranslationMapping,
        ) -> anyhow::Result<ReferenceSet<OrderStatus>>;
    }
}

mock! {
    pub FacilityRepo {}
    #[async_trait]
    impl FacilityRepo for FacilityRepo {
        async fn get_all_facilities(&self, scope: &UtilityScope)
            -> anyhow::Result<ReferenceSet<Facility>>;
    }
}

mock! {
    pub ChecklistRepo {}
    #[async_trait]
    impl ChecklistRepo for ChecklistRepo {
        async fn get_all_checklists(
            &self,
            scope: &UtilityScope,
        ) -> anyhow::Result<ReferenceSet<Checklist>>;
    }
}

mock! {
    pub LocationRepo {}
    #[async_trait]
    impl LocationRepo for LocationRepo {
        async fn get_all_locations(&self) -> anyhow::Result<ReferenceSet<Location>>;
    }
}

mock! {
    pub UtilityRepo {}
    #[async_trait]
    impl UtilityRepo for UtilityRepo {
        async fn get_all_utilities(
            &self,
            translation: &TranslationMapping,
        ) -> anyhow::Result<ReferenceSet<Utility>>;
    }
}

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn get_all_technicians(&self) -> anyhow::Result<ReferenceSet<User>>;
        async fn get_by_id(&self, user_id: &str) -> anyhow::Result<Option<User>>;
    }
}

mock! {
    pub OrderSubmissionService {}
    #[async_trait]
    impl OrderSubmissionService for OrderSubmissionService {
        async fn submit(&self, order: Order) -> OperationResult;
    }
}

mock! {
    pub OrderFormService {}
    #[async_trait]
    impl OrderFormService for OrderFormService {
        async fn render(
            &self,
            utility_id: Option<i32>,
            session: &mut SessionContext,
        ) -> OrderResult<OrderFormView>;
        async fn submit(
            &self,
            command: CreateOrderCommand,
            session: &mut SessionContext,
        ) -> OrderResult<FormSubmission>;
    }
}

mock! {
    pub PermissionService {}
    impl PermissionService for PermissionService {
        fn has_permission(&self, session: &mut SessionContext, permission: Permission) -> bool;
        fn authenticated(&self, session: &SessionContext) -> bool;
    }
}

mock! {
    pub TranslationService {}
    impl TranslationService for TranslationService {
        fn load(&self, language: Language) -> OrderResult<Arc<TranslationBundle>>;
    }
}

mock! {
    pub ReferenceDataService {}
    #[async_trait]
    impl ReferenceDataService for ReferenceDataService {
        async fn form_references(
            &self,
            scope: &UtilityScope,
            translation: &DatabaseTranslation,
        ) -> anyhow::Result<FormReferences>;
        async fn get_utilities(
            &self,
            translation: &DatabaseTranslation,
        ) -> anyhow::Result<ReferenceSet<Utility>>;
        async fn get_order_types(
            &self,
            scope: &UtilityScope,
            translation: &DatabaseTranslation,
        ) -> anyhow::Result<ReferenceSet<OrderType>>;
        async fn get_order_statuses(
            &self,
            scope: &UtilityScope,
            translation: &DatabaseTranslation,
        ) -> anyhow::Result<ReferenceSet<OrderStatus>>;
    }
}
