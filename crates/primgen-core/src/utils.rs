/// Convert a camelCase, snake_case or kebab-case stem to PascalCase.
///
/// Separators (`_`, `-`, `.`) are dropped and the following character is
/// uppercased. Unlike a full normalization, interior case is preserved so
/// camelCase stems keep their word boundaries.
///
/// # Examples
/// ```
/// use primgen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("arrayStack"), "ArrayStack");
/// assert_eq!(to_pascal_case("hash_set"), "HashSet");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if matches!(c, '_' | '-' | '.') {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Name of the file generated from a group file stem for one primitive.
///
/// A leading `primitive` placeholder is replaced by the primitive's name;
/// otherwise the name is prepended.
///
/// # Examples
/// ```
/// use primgen_core::utils::specialized_name;
/// assert_eq!(specialized_name("primitiveArrayStack", "Int"), "IntArrayStack");
/// assert_eq!(specialized_name("arrayStackTest", "Long"), "LongArrayStackTest");
/// ```
pub fn specialized_name(stem: &str, primitive_name: &str) -> String {
    let suffix = stem.strip_prefix("primitive").unwrap_or(stem);
    format!("{}{}", primitive_name, to_pascal_case(suffix))
}
