use super::DbPool;
use crate::errors::StorageError;
use diesel::result::Error as DieselError;
use diesel::SqliteConnection;
use log::{debug, error};
use nestegg_core::errors::{DatabaseError, Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

// A job runs against the writer's dedicated connection. The return type is
// erased to `Box<dyn Any + Send>` so one channel can carry every job.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, Reply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// Each job runs inside its own immediate transaction; an `Err` from the
    /// job rolls the transaction back and is returned unchanged.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "Writer actor stopped accepting jobs".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer actor dropped the job without replying".to_string(),
            ))
        })??;

        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer actor returned an unexpected result type".to_string(),
            ))
        })
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one connection from the pool for its whole lifetime and
/// processes jobs serially. It stops once every `WriteHandle` is dropped.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let mut conn = pool.get().map_err(|e| {
        error!("Writer actor could not acquire a connection: {}", e);
        Error::from(StorageError::from(e))
    })?;

    let (tx, mut rx) = mpsc::channel::<(ErasedJob, Reply)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let mut job_error: Option<Error> = None;
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| match job(c) {
                    Ok(value) => Ok(value),
                    Err(e) => {
                        job_error = Some(e);
                        Err(StorageError::QueryFailed(DieselError::RollbackTransaction))
                    }
                })
                .map_err(|e| job_error.take().unwrap_or_else(|| e.into()));

            // The requester may have gone away (cancelled request); nothing to do then.
            let _ = reply_tx.send(result);
        }
        debug!("Writer actor shutting down");
    });

    Ok(WriteHandle { tx })
}
