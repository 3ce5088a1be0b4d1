use solgen::verifier::{
    capitalize_first_letter, class_name_is_valid, package_name_is_valid,
    required_args_are_not_empty,
};

#[test]
fn test_required_args_are_not_empty() {
    assert!(required_args_are_not_empty(&["Test", "org.com"]));
    assert!(!required_args_are_not_empty(&["Test", ""]));
    assert!(!required_args_are_not_empty(&["   ", "org.com"]));
}

#[test]
fn test_class_name_is_valid() {
    assert!(class_name_is_valid("Test"));
    assert!(class_name_is_valid("_Project1"));
    assert!(class_name_is_valid("$generated"));

    assert!(!class_name_is_valid(""));
    assert!(!class_name_is_valid("1Test"));
    assert!(!class_name_is_valid("my-project"));
    assert!(!class_name_is_valid("class"));
    assert!(!class_name_is_valid("null"));
}

#[test]
fn test_package_name_is_valid() {
    assert!(package_name_is_valid("org.com"));
    assert!(package_name_is_valid("a.b.c"));
    assert!(package_name_is_valid("single"));

    assert!(!package_name_is_valid(""));
    assert!(!package_name_is_valid("org..com"));
    assert!(!package_name_is_valid("org.com."));
    assert!(!package_name_is_valid("org.1com"));
    assert!(!package_name_is_valid("org.new"));
}

#[test]
fn test_capitalize_first_letter() {
    assert_eq!(capitalize_first_letter("test"), "Test");
    assert_eq!(capitalize_first_letter("Test"), "Test");
    assert_eq!(capitalize_first_letter("t"), "T");
    assert_eq!(capitalize_first_letter(""), "");
}
