mod logs;
mod mask;

pub use self::logs::Logger;
pub use self::mask::{mask_email, mask_token};
