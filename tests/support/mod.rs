pub mod deck_env;
