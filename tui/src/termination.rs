#[cfg(unix)]
use tokio::signal::unix::signal;
use tokio::sync::broadcast;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interrupted {
    OsSigInt,
    UserInt,
    ServerDisconnected,
}

#[derive(Debug, Clone)]
pub struct Terminator {
    interrupt_tx: broadcast::Sender<Interrupted>,
}

impl Terminator {
    pub fn new(interrupt_tx: broadcast::Sender<Interrupted>) -> Self {
        Self { interrupt_tx }
    }

    pub fn terminate(&mut self, interrupted: Interrupted) -> anyhow::Result<()> {
        self.interrupt_tx.send(interrupted)?;

        Ok(())
    }
}

#[cfg(unix)]
async fn terminate_by_unix_signal(mut terminator: Terminator) {
    let mut interrupt_signal = match signal(tokio::signal::unix::SignalKind::interrupt()) {
        Ok(interrupt_signal) => interrupt_signal,
        Err(err) => {
            warn!(%err, "could not listen for the interrupt signal");
            return;
        }
    };

    interrupt_signal.recv().await;

    if let Err(err) = terminator.terminate(Interrupted::OsSigInt) {
        warn!(%err, "could not broadcast the interrupt signal");
    }
}

// create a broadcast channel for retrieving the application kill signal
pub fn create_termination() -> (Terminator, broadcast::Receiver<Interrupted>) {
    let (tx, rx) = broadcast::channel(1);
    let terminator = Terminator::new(tx);

    #[cfg(unix)]
    tokio::spawn(terminate_by_unix_signal(terminator.clone()));

    (terminator, rx)
}
