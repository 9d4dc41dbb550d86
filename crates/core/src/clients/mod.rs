pub mod pix;

pub use pix::PixClient;
