//! Input validation for project and package identifiers.
//! Generated starter sources are JVM classes, so names must be valid
//! Java identifiers and must not collide with a reserved word.

const RESERVED_WORDS: [&str; 53] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Returns true when every argument is non-empty after trimming.
pub fn required_args_are_not_empty(args: &[&str]) -> bool {
    args.iter().all(|argument| !argument.trim().is_empty())
}

fn is_identifier(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Checks that a project name is usable as the generated starter class name.
pub fn class_name_is_valid(class_name: &str) -> bool {
    is_identifier(class_name) && !RESERVED_WORDS.contains(&class_name)
}

/// Checks that every dot-separated segment of a package name is a valid,
/// non-reserved identifier.
pub fn package_name_is_valid(package_name: &str) -> bool {
    !package_name.is_empty()
        && package_name
            .split('.')
            .all(|segment| is_identifier(segment) && !RESERVED_WORDS.contains(&segment))
}

/// Upper-cases the first letter of the input, leaving the rest untouched.
/// Starter class files are named after the project with this rule applied.
pub fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => input.to_string(),
    }
}
