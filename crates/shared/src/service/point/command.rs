use crate::{
    abstract_trait::point::{
        repository::{DynPointHistoryRepository, DynUserPointRepository},
        service::PointCommandServiceTrait,
    },
    domain::{
        requests::{ChargePointRequest, UsePointRequest},
        responses::{ApiResponse, UserPointResponse},
    },
    errors::{ServiceError, format_validation_errors},
    model::point_history::TransactionType,
    service::point::{PointLockRegistry, PointPolicy},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

/// Serialized charge/use against the ledger tables.
///
/// Each mutation runs a read-modify-write cycle while holding the user's
/// token from [`PointLockRegistry`]. Validation of the amount happens before
/// the token is taken; balance rules are checked after the read and before
/// any write, so a rejected request leaves both tables untouched.
pub struct PointCommandService {
    user_point: DynUserPointRepository,
    history: DynPointHistoryRepository,
    locks: Arc<PointLockRegistry>,
    policy: PointPolicy,
}

impl PointCommandService {
    pub async fn new(
        user_point: DynUserPointRepository,
        history: DynPointHistoryRepository,
        locks: Arc<PointLockRegistry>,
        policy: PointPolicy,
    ) -> Self {
        Self {
            user_point,
            history,
            locks,
            policy,
        }
    }

    pub fn policy(&self) -> PointPolicy {
        self.policy
    }

    async fn apply(
        &self,
        user_id: i64,
        amount: i64,
        kind: TransactionType,
    ) -> Result<UserPointResponse, ServiceError> {
        let _guard = self.locks.acquire(user_id).await;

        let current = self.user_point.select_by_id(user_id).await.map_err(|e| {
            error!("❌ Failed to read point for user {user_id}: {e:?}");
            ServiceError::from(e)
        })?;

        let new_point = match kind {
            TransactionType::Charge => self.policy.charged_total(current.point, amount),
            TransactionType::Use => self.policy.used_total(current.point, amount),
        }
        .map_err(|e| {
            error!("❌ {kind} rejected for user {user_id}: {e}");
            e
        })?;

        let entry = self
            .history
            .insert(user_id, amount, kind, Utc::now().naive_utc())
            .await
            .map_err(|e| {
                error!("❌ Failed to append {kind} history for user {user_id}: {e:?}");
                ServiceError::from(e)
            })?;

        // A failed write here leaves the appended history entry without a balance change.
        let updated = self
            .user_point
            .insert_or_update(user_id, new_point)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to store point for user {user_id} after history {}: {e:?}",
                    entry.id
                );
                ServiceError::from(e)
            })?;

        info!(
            "✅ {kind} completed: user_id={user_id} amount={amount} history_id={} balance={}",
            entry.id, updated.point
        );

        Ok(UserPointResponse::from(updated))
    }
}

#[async_trait]
impl PointCommandServiceTrait for PointCommandService {
    async fn charge(
        &self,
        req: &ChargePointRequest,
    ) -> Result<ApiResponse<UserPointResponse>, ServiceError> {
        info!("🚀 Starting ChargePoint: {:?}", req);

        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::InvalidArgument(error_msg));
        }

        let data = self
            .apply(req.user_id, req.amount, TransactionType::Charge)
            .await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Point charged successfully".into(),
            data,
        })
    }

    async fn use_point(
        &self,
        req: &UsePointRequest,
    ) -> Result<ApiResponse<UserPointResponse>, ServiceError> {
        info!("🚀 Starting UsePoint: {:?}", req);

        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::InvalidArgument(error_msg));
        }

        let data = self
            .apply(req.user_id, req.amount, TransactionType::Use)
            .await?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Point used successfully".into(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::point::repository::{
            PointHistoryRepositoryTrait, UserPointRepositoryTrait,
        },
        errors::RepositoryError,
        model::point_history::PointHistoryModel,
        repository::point::{PointHistoryTable, UserPointTable},
    };
    use chrono::NaiveDateTime;
    use std::time::Duration;
    use tokio::time::timeout;

    struct Fixture {
        user_point: Arc<UserPointTable>,
        history: Arc<PointHistoryTable>,
        locks: Arc<PointLockRegistry>,
        service: PointCommandService,
    }

    async fn fixture(policy: PointPolicy) -> Fixture {
        let user_point = Arc::new(UserPointTable::new());
        let history = Arc::new(PointHistoryTable::new());
        let locks = Arc::new(PointLockRegistry::new());
        let service = PointCommandService::new(
            user_point.clone(),
            history.clone(),
            locks.clone(),
            policy,
        )
        .await;

        Fixture {
            user_point,
            history,
            locks,
            service,
        }
    }

    fn charge(user_id: i64, amount: i64) -> ChargePointRequest {
        ChargePointRequest { user_id, amount }
    }

    fn use_point(user_id: i64, amount: i64) -> UsePointRequest {
        UsePointRequest { user_id, amount }
    }

    #[tokio::test]
    async fn charge_adds_to_existing_balance() {
        let f = fixture(PointPolicy::default()).await;
        f.user_point.insert_or_update(1, 50).await.unwrap();

        let response = f.service.charge(&charge(1, 100)).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.point, 150);

        let history = f.history.select_all_by_user_id(1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 100);
        assert_eq!(history[0].kind, TransactionType::Charge);
    }

    #[tokio::test]
    async fn use_subtracts_from_balance() {
        let f = fixture(PointPolicy::default()).await;
        f.user_point.insert_or_update(1, 50).await.unwrap();

        let response = f.service.use_point(&use_point(1, 20)).await.unwrap();

        assert_eq!(response.data.point, 30);
        let history = f.history.select_all_by_user_id(1).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, TransactionType::Use);
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected_without_history() {
        let f = fixture(PointPolicy::default()).await;

        for amount in [0, -1, i64::MIN] {
            let err = f.service.charge(&charge(1, amount)).await.unwrap_err();
            assert!(
                matches!(&err, ServiceError::InvalidArgument(msg) if msg == "charge amount must be greater than zero")
            );

            let err = f.service.use_point(&use_point(1, amount)).await.unwrap_err();
            assert!(
                matches!(&err, ServiceError::InvalidArgument(msg) if msg == "use amount must be greater than zero")
            );
        }

        assert!(f.history.select_all_by_user_id(1).await.unwrap().is_empty());
        assert_eq!(f.locks.tracked_users(), 0);
    }

    #[tokio::test]
    async fn overdraft_leaves_state_unchanged() {
        let f = fixture(PointPolicy::default()).await;
        f.user_point.insert_or_update(1, 50).await.unwrap();

        let err = f.service.use_point(&use_point(1, 100)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::InsufficientBalance {
                requested: 100,
                available: 50
            }
        ));
        assert_eq!(f.user_point.select_by_id(1).await.unwrap().point, 50);
        assert!(f.history.select_all_by_user_id(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn charge_above_ceiling_leaves_state_unchanged() {
        let f = fixture(PointPolicy::with_max_balance(10_000)).await;
        f.user_point.insert_or_update(1, 50).await.unwrap();

        let err = f.service.charge(&charge(1, 10_000)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::LimitExceeded {
                requested: 10_050,
                max: 10_000
            }
        ));
        assert_eq!(f.user_point.select_by_id(1).await.unwrap().point, 50);
        assert!(f.history.select_all_by_user_id(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn every_mutation_is_recorded_in_order() {
        let f = fixture(PointPolicy::default()).await;
        f.user_point.insert_or_update(1, 100).await.unwrap();

        f.service.use_point(&use_point(1, 100)).await.unwrap();
        for amount in [100, 200, 300, 400] {
            f.service.charge(&charge(1, amount)).await.unwrap();
        }

        let history = f.history.select_all_by_user_id(1).await.unwrap();
        let kinds: Vec<_> = history.iter().map(|h| (h.kind, h.amount)).collect();
        assert_eq!(
            kinds,
            vec![
                (TransactionType::Use, 100),
                (TransactionType::Charge, 100),
                (TransactionType::Charge, 200),
                (TransactionType::Charge, 300),
                (TransactionType::Charge, 400),
            ]
        );
        assert_eq!(f.user_point.select_by_id(1).await.unwrap().point, 1_000);
    }

    #[tokio::test]
    async fn held_user_does_not_delay_other_users() {
        let f = fixture(PointPolicy::default()).await;

        let held = f.locks.acquire(1).await;

        let other = timeout(Duration::from_millis(200), f.service.charge(&charge(2, 10))).await;
        assert_eq!(other.unwrap().unwrap().data.point, 10);

        let blocked = timeout(Duration::from_millis(50), f.service.charge(&charge(1, 10))).await;
        assert!(blocked.is_err());

        drop(held);
        assert_eq!(f.user_point.select_by_id(1).await.unwrap().point, 0);
        assert!(f.history.select_all_by_user_id(1).await.unwrap().is_empty());
    }

    struct UnavailableHistory;

    #[async_trait]
    impl PointHistoryRepositoryTrait for UnavailableHistory {
        async fn insert(
            &self,
            _user_id: i64,
            _amount: i64,
            _kind: TransactionType,
            _occurred_at: NaiveDateTime,
        ) -> Result<PointHistoryModel, RepositoryError> {
            Err(RepositoryError::Unavailable("history table offline".into()))
        }

        async fn select_all_by_user_id(
            &self,
            _user_id: i64,
        ) -> Result<Vec<PointHistoryModel>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn store_failures_propagate_and_release_the_token() {
        let user_point = Arc::new(UserPointTable::new());
        let locks = Arc::new(PointLockRegistry::new());
        let service = PointCommandService::new(
            user_point.clone(),
            Arc::new(UnavailableHistory),
            locks.clone(),
            PointPolicy::default(),
        )
        .await;

        let err = service.charge(&charge(1, 10)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::Unavailable(_))
        ));
        assert_eq!(user_point.select_by_id(1).await.unwrap().point, 0);

        let again = timeout(Duration::from_millis(100), locks.acquire(1)).await;
        assert!(again.is_ok());
    }
}
