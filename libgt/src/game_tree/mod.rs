/// Defines the main components used to specify an entire game tree.

mod player;
mod vertex;

pub use player::Player;
pub use vertex::GameTreeVertex;
pub use vertex::Leaf;
pub use vertex::VertexType;
