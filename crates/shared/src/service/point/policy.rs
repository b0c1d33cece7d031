use crate::errors::ServiceError;

/// Ceiling applied when no explicit configuration is given.
pub const DEFAULT_MAX_BALANCE: i64 = 10_000;

/// Balance rules applied inside the per-user critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointPolicy {
    pub max_balance: Option<i64>,
}

impl Default for PointPolicy {
    fn default() -> Self {
        Self {
            max_balance: Some(DEFAULT_MAX_BALANCE),
        }
    }
}

impl PointPolicy {
    pub fn unlimited() -> Self {
        Self { max_balance: None }
    }

    pub fn with_max_balance(max_balance: i64) -> Self {
        Self {
            max_balance: Some(max_balance),
        }
    }

    /// Balance after crediting `amount`, rejected above the ceiling.
    pub fn charged_total(&self, current: i64, amount: i64) -> Result<i64, ServiceError> {
        let max = self.max_balance.unwrap_or(i64::MAX);

        match current.checked_add(amount) {
            Some(total) if total <= max => Ok(total),
            _ => Err(ServiceError::LimitExceeded {
                requested: current.saturating_add(amount),
                max,
            }),
        }
    }

    /// Balance after debiting `amount`, rejected on overdraft.
    pub fn used_total(&self, current: i64, amount: i64) -> Result<i64, ServiceError> {
        if amount > current {
            return Err(ServiceError::InsufficientBalance {
                requested: amount,
                available: current,
            });
        }

        Ok(current - amount)
    }
}
