use glam::Quat;
use serde::{Deserialize, Serialize};

use hexworld_common::{AxialCoord, HexDirection};
use hexworld_input::{Action, camera_relative};
use hexworld_kernel::{Biome, Tile, WorldModel};

/// Movement settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Range generated around a destination as soon as a move is accepted.
    pub expand_range: i32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { expand_range: 2 }
    }
}

/// Movement state of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    Idle,
    /// A move was accepted and the view layer is animating it.
    Moving { from: AxialCoord, to: AxialCoord },
}

/// Why a move request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// No tile has been generated at the target.
    Missing,
    /// The target tile exists but cannot be entered.
    Impassable(Biome),
    /// The step would leave the `i32` coordinate range.
    OutOfBounds,
}

/// An accepted move waiting for its animation to finish.
///
/// Hand it back to [`AgentController::complete`] once the transition is done,
/// or to [`AgentController::cancel`] to abandon it. It cannot be cloned, so a
/// transition is committed at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending move must be completed or cancelled to release the agent"]
pub struct PendingMove {
    sequence: u64,
    from: AxialCoord,
    to: AxialCoord,
    direction: HexDirection,
}

impl PendingMove {
    pub fn from(&self) -> AxialCoord {
        self.from
    }

    pub fn to(&self) -> AxialCoord {
        self.to
    }

    pub fn direction(&self) -> HexDirection {
        self.direction
    }
}

/// Result of a move request.
#[derive(Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was accepted. `new_tiles` are the tiles generated around the
    /// destination, for the view layer to add.
    Started {
        pending: PendingMove,
        new_tiles: Vec<Tile>,
    },
    /// The target is missing or impassable; the agent stays idle.
    Blocked {
        target: AxialCoord,
        reason: BlockReason,
    },
    /// A move is already in flight; the request was dropped.
    Ignored,
}

/// Errors from finishing a transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("no move is in flight")]
    NotMoving,
    #[error("transition #{got} does not match the move in flight (#{expected})")]
    StaleTransition { expected: u64, got: u64 },
}

/// Drives the agent across the world one hex at a time.
///
/// The world is passed into each call rather than stored, so the controller
/// and the world can be owned independently.
#[derive(Debug)]
pub struct AgentController {
    position: AxialCoord,
    state: AgentState,
    sequence: u64,
    config: AgentConfig,
}

impl AgentController {
    /// Create an idle agent at the origin.
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            position: AxialCoord::ORIGIN,
            state: AgentState::Idle,
            sequence: 0,
            config,
        }
    }

    /// Create an idle agent at `position`.
    pub fn at(position: AxialCoord, config: AgentConfig) -> Self {
        Self {
            position,
            ..Self::with_config(config)
        }
    }

    /// Committed position. Does not change while a move is in flight.
    pub fn position(&self) -> AxialCoord {
        self.position
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, AgentState::Moving { .. })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Request a one-hex step in `direction`.
    ///
    /// On acceptance the world is expanded around the destination before the
    /// move finishes, so its surroundings exist when the agent arrives.
    pub fn request_move(&mut self, world: &mut WorldModel, direction: HexDirection) -> MoveOutcome {
        if let AgentState::Moving { to, .. } = self.state {
            tracing::trace!(%direction, pending = %to, "move in flight, ignoring request");
            return MoveOutcome::Ignored;
        }

        let Some(target) = self.position.checked_neighbor(direction) else {
            tracing::info!(from = %self.position, %direction, "move blocked at coordinate limit");
            return MoveOutcome::Blocked {
                target: self.position,
                reason: BlockReason::OutOfBounds,
            };
        };
        let reason = match world.get(target) {
            None => Some(BlockReason::Missing),
            Some(tile) if !tile.is_passable() => Some(BlockReason::Impassable(tile.biome)),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            tracing::info!(from = %self.position, %target, ?reason, "move blocked");
            return MoveOutcome::Blocked { target, reason };
        }

        let new_tiles = world.expand(target, self.config.expand_range);
        self.sequence += 1;
        self.state = AgentState::Moving {
            from: self.position,
            to: target,
        };
        tracing::debug!(
            from = %self.position,
            %target,
            new_tiles = new_tiles.len(),
            "move started"
        );
        MoveOutcome::Started {
            pending: PendingMove {
                sequence: self.sequence,
                from: self.position,
                to: target,
                direction,
            },
            new_tiles,
        }
    }

    /// Like [`request_move`](Self::request_move), with `direction` taken
    /// relative to the camera orientation.
    pub fn request_move_facing(
        &mut self,
        world: &mut WorldModel,
        direction: HexDirection,
        camera_rotation: Quat,
    ) -> MoveOutcome {
        self.request_move(world, camera_relative(direction, camera_rotation))
    }

    /// Apply an input action. Returns `None` for actions that do not move.
    pub fn apply(&mut self, world: &mut WorldModel, action: Action) -> Option<MoveOutcome> {
        match action {
            Action::Move(direction) => Some(self.request_move(world, direction)),
            Action::Noop => None,
        }
    }

    /// Commit a finished transition: the agent now stands on its target.
    pub fn complete(&mut self, pending: PendingMove) -> Result<AxialCoord, AgentError> {
        self.release(&pending)?;
        self.position = pending.to;
        tracing::debug!(position = %self.position, "move completed");
        Ok(self.position)
    }

    /// Abandon a transition without moving. Tiles generated for it remain.
    pub fn cancel(&mut self, pending: PendingMove) -> Result<(), AgentError> {
        self.release(&pending)?;
        tracing::debug!(position = %self.position, target = %pending.to, "move cancelled");
        Ok(())
    }

    fn release(&mut self, pending: &PendingMove) -> Result<(), AgentError> {
        if self.state == AgentState::Idle {
            return Err(AgentError::NotMoving);
        }
        if pending.sequence != self.sequence {
            return Err(AgentError::StaleTransition {
                expected: self.sequence,
                got: pending.sequence,
            });
        }
        self.state = AgentState::Idle;
        Ok(())
    }
}

impl Default for AgentController {
    fn default() -> Self {
        Self::new()
    }
}
