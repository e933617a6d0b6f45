mod aux_state;
mod builder;
mod sequence_form_program;
mod treeplex_information;
mod util;

pub use self::aux_state::AuxState;
pub use self::builder::SequenceFormBuilder;
pub use self::sequence_form_program::SequenceFormProgram;
pub use self::treeplex_information::{InfosetInfo, TreeplexInformation};
pub use self::util::{InfosetOrEmpty, Sequence, SequenceOrEmpty};
