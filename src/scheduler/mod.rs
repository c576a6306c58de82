//! Recurring background jobs.
//!
//! Both jobs run on a `tokio-cron-scheduler` [`JobScheduler`](tokio_cron_scheduler::JobScheduler)
//! with a fixed interval rather than a cron expression. The returned scheduler handle
//! must be kept alive for the jobs to keep running.

pub mod giveaway_roles;
pub mod wallet_queue;
