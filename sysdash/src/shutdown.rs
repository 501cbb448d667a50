//! Termination handshake between the dashboard loop and whoever supervises it.
//!
//! The loop fires `terminate` once to ask the process to wind down, then
//! `complete` once it has stopped touching the terminal. Both are single-shot.

use tokio::sync::oneshot;

pub struct Shutdown {
    terminate: Option<oneshot::Sender<()>>,
    done: Option<oneshot::Sender<()>>,
}

pub struct ShutdownWaiter {
    terminate: oneshot::Receiver<()>,
    done: oneshot::Receiver<()>,
}

pub fn channel() -> (Shutdown, ShutdownWaiter) {
    let (term_tx, term_rx) = oneshot::channel();
    let (done_tx, done_rx) = oneshot::channel();
    (
        Shutdown {
            terminate: Some(term_tx),
            done: Some(done_tx),
        },
        ShutdownWaiter {
            terminate: term_rx,
            done: done_rx,
        },
    )
}

impl Shutdown {
    /// Ask the supervisor to terminate. Later calls do nothing.
    pub fn terminate(&mut self) {
        if let Some(tx) = self.terminate.take() {
            let _ = tx.send(());
        }
    }

    /// Acknowledge that the loop is finished. Later calls do nothing.
    pub fn complete(&mut self) {
        if let Some(tx) = self.done.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for Shutdown {
    fn drop(&mut self) {
        // error paths and aborted tasks still release the supervisor
        self.complete();
    }
}

impl ShutdownWaiter {
    /// Resolves on the termination request. Returns `false` if the loop went
    /// away without asking (error exit or abort).
    pub async fn terminated(&mut self) -> bool {
        (&mut self.terminate).await.is_ok()
    }

    /// Resolves once the loop has acknowledged completion (or was dropped).
    pub async fn done(self) {
        let _ = self.done.await;
    }
}
