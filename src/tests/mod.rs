mod consent_tests;
mod helpers;
mod login_tests;
mod test_http_client;
