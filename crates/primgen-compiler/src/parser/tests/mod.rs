mod body_tests;
mod expr_tests;
mod group_tests;
mod recovery_tests;
