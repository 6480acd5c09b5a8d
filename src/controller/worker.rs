use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::shared::SharedGame;
use crate::ai::Agent;
use crate::error::GameError;
use crate::game::Move;

/// Commands sent from the controller to the computer thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCommand {
    Play,
    Shutdown,
}

/// Result of one computer move, sent back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    pub result: Result<Move, GameError>,
}

/// Background thread that plays the computer's moves.
///
/// The thread owns the agent and mutates the game only through
/// [`SharedGame`]. Requests are served in order; a dispatched move always
/// completes.
pub struct ComputerWorker {
    commands: Sender<WorkerCommand>,
    replies: Receiver<ComputerMove>,
    handle: Option<JoinHandle<()>>,
}

impl ComputerWorker {
    pub fn spawn<A>(game: SharedGame, agent: A, delay: Duration) -> Self
    where
        A: Agent + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel::<WorkerCommand>();
        let (reply_tx, reply_rx) = mpsc::channel::<ComputerMove>();

        let handle = thread::spawn(move || {
            let mut agent = agent;
            run(&game, &mut agent, delay, command_rx, reply_tx);
        });

        ComputerWorker {
            commands: command_tx,
            replies: reply_rx,
            handle: Some(handle),
        }
    }

    /// Ask for one computer move. Returns `false` if the thread has exited.
    pub fn request_move(&self) -> bool {
        self.commands.send(WorkerCommand::Play).is_ok()
    }

    /// Next finished move, if one is ready.
    pub fn try_recv(&self) -> Option<ComputerMove> {
        self.replies.try_recv().ok()
    }

    /// Block until the next move finishes. `None` if the thread has exited.
    pub fn recv(&self) -> Option<ComputerMove> {
        self.replies.recv().ok()
    }
}

impl Drop for ComputerWorker {
    fn drop(&mut self) {
        let _ = self.commands.send(WorkerCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(
    game: &SharedGame,
    agent: &mut dyn Agent,
    delay: Duration,
    commands: Receiver<WorkerCommand>,
    replies: Sender<ComputerMove>,
) {
    tracing::debug!(agent = agent.name(), "computer worker started");
    for command in commands {
        match command {
            WorkerCommand::Play => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let result = game.play_with(agent);
                tracing::debug!(?result, "computer move finished");
                if replies.send(ComputerMove { result }).is_err() {
                    break;
                }
            }
            WorkerCommand::Shutdown => break,
        }
    }
    tracing::debug!("computer worker stopped");
}
