mod service_tests;
mod validator_tests;
