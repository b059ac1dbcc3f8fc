use crate::failure::check;
use crate::named::{Named, named};

impl Named<'_> {
    #[track_caller]
    pub fn assert_contains_str(&self, string_to_find: &str, string_to_search: &str) {
        check(string_to_search.contains(string_to_find), || {
            format!(
                "{} did not contain stringToFind:<{}> in stringToSearch:<{}>",
                self.name(),
                string_to_find,
                string_to_search
            )
        });
    }

    #[track_caller]
    pub fn assert_not_contains_str(&self, unexpected: &str, string_to_search: &str) {
        check(!string_to_search.contains(unexpected), || {
            format!(
                "{} contains unexpectedString:<{}> in stringToSearch:<{}>",
                self.name(),
                unexpected,
                string_to_search
            )
        });
    }
}

#[track_caller]
pub fn assert_contains_str(string_to_find: &str, string_to_search: &str) {
    named("string").assert_contains_str(string_to_find, string_to_search);
}

#[track_caller]
pub fn assert_not_contains_str(unexpected: &str, string_to_search: &str) {
    named("string").assert_not_contains_str(unexpected, string_to_search);
}
