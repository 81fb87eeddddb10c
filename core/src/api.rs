pub use crate::config::ParseOptions;
pub use crate::errors::SdkError;
pub use crate::haptic::{HapticFeedback, ImpactStyle, NotificationType, HAPTIC_FEEDBACK_METHOD};
pub use crate::init_data::{
    parse, parse_bytes, parse_query, parse_query_with, parse_with, Chat, InitData, RawInitData,
    User,
};
pub use crate::query::{parse_query_string, QueryParams};
pub use crate::safe_call::{safe_call, safe_try, PanicPayload, SafeCallResult};
pub use crate::validation::{validate_input_size, validate_utf8_string};
