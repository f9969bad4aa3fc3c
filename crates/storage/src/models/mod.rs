pub mod film;
pub mod meeting;
pub mod score;

pub use film::Film;
pub use meeting::Meeting;
pub use score::Score;
