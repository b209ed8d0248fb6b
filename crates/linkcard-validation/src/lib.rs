//! LinkCard Validation
//!
//! Pure, stateless classification and cleaning of untrusted profile input.
//!
//! # Overview
//!
//! - **Outbound URLs**: [`validate_url`] for advisory messages while editing,
//!   [`is_valid_outbound_url`] as the live guard before honoring a click
//! - **Email**: [`validate_email`] and [`create_safe_mailto_link`]
//! - **Phone**: [`sanitize_phone_number`] and [`create_tel_link`]
//!
//! Error `Display` text is the user-facing message.
//!
//! # Example
//!
//! ```rust
//! use linkcard_validation::{is_valid_outbound_url, sanitize_phone_number, validate_email};
//!
//! assert!(is_valid_outbound_url("https://example.com"));
//! assert!(!is_valid_outbound_url("javascript:alert(1)"));
//! assert_eq!(sanitize_phone_number("+91 96-876 266 09"), "+919687626609");
//! assert!(validate_email("").is_ok());
//! ```

#![warn(missing_docs)]

pub mod email;
pub mod outbound;
pub mod phone;

// Re-exports
pub use email::{create_safe_mailto_link, validate_email, EmailError};
pub use outbound::{is_valid_outbound_url, validate_url, UrlError, UNSAFE_SCHEMES};
pub use phone::{create_tel_link, sanitize_phone_number};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validating profile input
    pub use crate::{
        create_safe_mailto_link, create_tel_link, is_valid_outbound_url, sanitize_phone_number,
        validate_email, validate_url, EmailError, UrlError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
