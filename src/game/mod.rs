//! The game: board state, flip rules, and the timed state machine.
//!
//! ## Key Types
//!
//! - [`MemoryGame`]: drives a game from host input and logical time
//! - [`GameState`]: the board, counters and [`Phase`]
//! - [`FlipOutcome`]: result of a click, including why it was ignored
//! - [`CardView`] / [`BoardLayout`] / [`GameStats`]: read-models for renderers

mod flip;
mod session;
mod state;
mod stats;
mod view;

pub use flip::{FlipOutcome, FlipRejection};
pub use session::{MemoryGame, MemoryGameBuilder};
pub use state::{GameState, Phase};
pub use stats::{format_time, GameStats};
pub use view::{BoardLayout, CardView};
