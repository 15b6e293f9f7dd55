//! Session store
//!
//! Login performs no credential verification: any non-empty personnel id and
//! any role are accepted after a fixed delay. Sessions expire a fixed time
//! after login; expired entries are dropped on lookup and swept on login.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::errors::ConsoleError;
use crate::models::user::{Capability, User, UserRole};
use crate::utils::generate_uuid;

/// A logged-in user bound to an opaque token
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub logged_in_at: DateTime<Utc>,
    issued_at: Instant,
    analysis_in_flight: Arc<AtomicBool>,
}

impl Session {
    fn new(user: User) -> Self {
        Self {
            token: generate_uuid(),
            user,
            logged_in_at: Utc::now(),
            issued_at: Instant::now(),
            analysis_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fail with [`ConsoleError::Forbidden`] unless the role grants `capability`
    pub fn require(&self, capability: Capability) -> Result<(), ConsoleError> {
        if self.user.role.has(capability) {
            Ok(())
        } else {
            Err(ConsoleError::Forbidden(format!(
                "{:?} lacks {:?}",
                self.user.role, capability
            )))
        }
    }

    /// Mark an analysis as running for this session
    ///
    /// Only one analysis may be in flight per session. The returned guard
    /// clears the mark when dropped, including when the request future is
    /// dropped before completion.
    pub fn begin_analysis(&self) -> Result<AnalysisGuard, ConsoleError> {
        self.analysis_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ConsoleError::Busy("an analysis is already running".to_string()))?;
        Ok(AnalysisGuard {
            flag: self.analysis_in_flight.clone(),
        })
    }

    pub fn analysis_in_flight(&self) -> bool {
        self.analysis_in_flight.load(Ordering::Acquire)
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.issued_at.elapsed() >= ttl
    }
}

/// Clears a session's in-flight mark on drop
#[derive(Debug)]
pub struct AnalysisGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for AnalysisGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Active sessions keyed by token
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    login_delay: Duration,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(login_delay: Duration, ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            login_delay,
            ttl,
        }
    }

    /// Open a session for `personnel_id` with `role`
    pub async fn login(&self, personnel_id: &str, role: UserRole) -> Result<Session, ConsoleError> {
        let personnel_id = personnel_id.trim();
        if personnel_id.is_empty() {
            return Err(ConsoleError::ValidationError(
                "personnel id is required".to_string(),
            ));
        }

        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        let session = Session::new(User::new(personnel_id, role));
        info!(
            user = %session.user.id,
            role = ?role,
            at = %session.logged_in_at.to_rfc3339(),
            "Session opened"
        );

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(self.ttl));
        if sessions.len() < before {
            debug!("Swept {} expired sessions", before - sessions.len());
        }
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    /// Close a session; returns whether it existed
    pub async fn logout(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(token);
        if let Some(session) = &removed {
            info!(user = %session.user.id, "Session closed");
        }
        removed.is_some()
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        let session = self.sessions.read().await.get(token).cloned();
        match session {
            Some(session) if session.is_expired(self.ttl) => {
                self.sessions.write().await.remove(token);
                info!(
                    user = %session.user.id,
                    since = %session.logged_in_at.to_rfc3339(),
                    "Session expired"
                );
                None
            }
            Some(session) => Some(session),
            None => {
                debug!("Unknown session token");
                None
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
