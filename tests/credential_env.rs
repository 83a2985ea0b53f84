//! Construction against the real process environment.
//!
//! Kept in its own test binary with a single test so no other test observes
//! the variable changing.

use bild::{BildClient, BildError};

#[test]
fn environment_credential_lifecycle() {
    std::env::remove_var("BILD_API_KEY");

    assert_eq!(BildClient::new(None).unwrap_err(), BildError::MissingCredential);
    assert_eq!(
        BildClient::new(Some("env")).unwrap_err(),
        BildError::MissingCredential
    );
    assert_eq!(BildClient::from_env().unwrap_err(), BildError::MissingCredential);

    std::env::set_var("BILD_API_KEY", "from-env");
    assert_eq!(BildClient::new(None).unwrap().auth_header(), "Bearer from-env");
    assert_eq!(
        BildClient::new(Some("env")).unwrap().auth_header(),
        "Bearer from-env"
    );

    // An explicit token ignores the environment entirely.
    assert_eq!(
        BildClient::new(Some("explicit")).unwrap().auth_header(),
        "Bearer explicit"
    );

    std::env::set_var("BILD_API_KEY", "");
    assert_eq!(BildClient::new(None).unwrap_err(), BildError::MissingCredential);

    std::env::remove_var("BILD_API_KEY");
}
