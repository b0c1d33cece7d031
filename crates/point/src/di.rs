use anyhow::Result;
use shared::{
    abstract_trait::point::{
        repository::{DynPointHistoryRepository, DynUserPointRepository},
        service::{DynPointCommandService, DynPointQueryService},
    },
    config::PointConfig,
    repository::point::{PointHistoryTable, UserPointTable},
    service::point::{PointCommandService, PointLockRegistry, PointQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct PointCommandDeps {
    pub service: DynPointCommandService,
}

impl PointCommandDeps {
    pub async fn new(
        user_point: DynUserPointRepository,
        history: DynPointHistoryRepository,
        locks: Arc<PointLockRegistry>,
        config: &PointConfig,
    ) -> Result<Self> {
        let service = Arc::new(
            PointCommandService::new(user_point, history, locks, config.policy()).await,
        ) as DynPointCommandService;

        Ok(Self { service })
    }
}

#[derive(Clone)]
pub struct PointQueryDeps {
    pub service: DynPointQueryService,
}

impl PointQueryDeps {
    pub async fn new(
        user_point: DynUserPointRepository,
        history: DynPointHistoryRepository,
    ) -> Result<Self> {
        let service =
            Arc::new(PointQueryService::new(user_point, history).await) as DynPointQueryService;

        Ok(Self { service })
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub point_command: PointCommandDeps,
    pub point_query: PointQueryDeps,
    pub locks: Arc<PointLockRegistry>,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("point_command", &"PointCommandService")
            .field("point_query", &"PointQueryService")
            .field("tracked_users", &self.locks.tracked_users())
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(config: &PointConfig) -> Result<Self> {
        let latency = config.latency();

        let user_point =
            Arc::new(UserPointTable::with_latency(latency)) as DynUserPointRepository;
        let history =
            Arc::new(PointHistoryTable::with_latency(latency)) as DynPointHistoryRepository;
        let locks = Arc::new(PointLockRegistry::new());

        let point_command =
            PointCommandDeps::new(user_point.clone(), history.clone(), locks.clone(), config)
                .await?;
        let point_query = PointQueryDeps::new(user_point, history).await?;

        Ok(Self {
            point_command,
            point_query,
            locks,
        })
    }
}
