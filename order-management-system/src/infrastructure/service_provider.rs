use std::sync::Arc;
use std::time::Duration;

use domain_order::{
    repository::UserRepo,
    service::{OrderFormService, PermissionService, ReferenceDataService, TranslationService},
};
use infrastructure_translation::TranslationLoader;
use service_order::{
    OrderFormServiceImpl, OrderSubmissionServiceImpl, PermissionServiceImpl,
    ReferenceDataServiceImpl,
};

use super::{
    config::OrderConfig,
    database::{initialize_schema, Database, OrmRepo},
    session::SessionStore,
};

/// Services shared by every request.
pub struct ServiceProvider {
    config: OrderConfig,
    database: Arc<Database>,
    translation_service: Arc<dyn TranslationService>,
    permission_service: Arc<dyn PermissionService>,
    session_store: Arc<SessionStore>,
}

/// Services of one request, sharing one unit of work.
pub struct ScopedServices {
    pub form_service: Arc<dyn OrderFormService>,
    pub reference_data_service: Arc<dyn ReferenceDataService>,
    pub user_repo: Arc<dyn UserRepo>,
}

impl ServiceProvider {
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let config: OrderConfig = config.try_deserialize()?;
        let database = Arc::new(Database::new(config.db().url()).await?);
        if *config.db().initialize() {
            initialize_schema(&database).await?;
        }
        Self::new(config, database)
    }

    pub fn new(config: OrderConfig, database: Arc<Database>) -> anyhow::Result<Self> {
        let translation_loader =
            TranslationLoader::new(config.application().translations_dir().as_deref());
        translation_loader.preload()?;
        let idle_timeout = Duration::from_secs(*config.application().session_idle_timeout());
        Ok(Self {
            config,
            database,
            translation_service: Arc::new(translation_loader),
            permission_service: Arc::new(PermissionServiceImpl),
            session_store: Arc::new(SessionStore::new(idle_timeout)),
        })
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    pub fn session_store(&self) -> Arc<SessionStore> {
        self.session_store.clone()
    }

    pub fn translation_service(&self) -> Arc<dyn TranslationService> {
        self.translation_service.clone()
    }

    pub fn scoped(&self) -> ScopedServices {
        let repo = Arc::new(OrmRepo::builder().db(self.database.clone()).build());
        let reference_data_service: Arc<dyn ReferenceDataService> = Arc::new(
            ReferenceDataServiceImpl::builder()
                .order_type_repo(repo.clone())
                .order_status_repo(repo.clone())
                .facility_repo(repo.clone())
                .checklist_repo(repo.clone())
                .location_repo(repo.clone())
                .utility_repo(repo.clone())
                .user_repo(repo.clone())
                .build(),
        );
        let submission_service = Arc::new(
            OrderSubmissionServiceImpl::builder()
                .order_repo(repo.clone())
                .build(),
        );
        let form_service = Arc::new(
            OrderFormServiceImpl::builder()
                .translation_service(self.translation_service.clone())
                .reference_data_service(reference_data_service.clone())
                .permission_service(self.permission_service.clone())
                .submission_service(submission_service)
                .timezone(*self.config.application().timezone())
                .build(),
        );
        ScopedServices {
            form_service,
            reference_data_service,
            user_repo: repo,
        }
    }
}
