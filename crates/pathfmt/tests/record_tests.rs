//! Integration tests for record binding and rendering
//!
//! Covers:
//! - Binding string/int/float/bool fields
//! - Missing and extra path values
//! - Coercion failures and partial binding
//! - Private and unsupported fields
//! - Rendering records and maps back into paths

#![allow(clippy::approx_constant)]

use pathfmt::{BindError, CoercionError, PathParams, PathRecord, RenderError, Template};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ABCD: &str = "/a/{a}/b/{b}/c/{c}/d/{d}";

#[derive(Debug, Default, Clone, PartialEq, PathRecord)]
pub struct MyPath {
    #[pathfmt("a")]
    pub a: String,
    #[pathfmt("b")]
    pub b: i32,
    #[pathfmt("c")]
    pub c: f64,
    #[pathfmt("d")]
    pub d: bool,
}

#[derive(Debug, Default, PathRecord)]
pub struct UserIdentifier {
    #[pathfmt("org_num")]
    pub org_num: i32,
    #[pathfmt("id")]
    pub id: String,
}

// ============================================================================
// Binding
// ============================================================================

#[rstest]
#[case::all_values("/a/abc/b/123/c/3.14/d/true", MyPath { a: "abc".to_string(), b: 123, c: 3.14, d: true })]
#[case::missing_values("/a/abc/b/123", MyPath { a: "abc".to_string(), b: 123, ..MyPath::default() })]
#[case::extra_values("/a/abc/b/123/c/3.14/d/true/e/extra", MyPath { a: "abc".to_string(), b: 123, c: 3.14, d: true })]
fn test_bind(#[case] input: &str, #[case] expected: MyPath) {
    let template = Template::new(ABCD);
    let mut path = MyPath::default();

    template.bind(input, &mut path).unwrap();

    assert_eq!(path, expected);
}

#[test]
fn test_bind_user_identifier() {
    let template = Template::new("/organizations/{org_num}/users/{id}");
    let user: UserIdentifier = template
        .extract("/organizations/123/users/nick")
        .unwrap();

    assert_eq!(user.org_num, 123);
    assert_eq!(user.id, "nick");
}

#[test]
fn test_bind_missing_values_keep_previous_state() {
    let template = Template::new(ABCD);
    let mut path = MyPath {
        a: "old".to_string(),
        b: 1,
        c: 9.5,
        d: true,
    };

    template.bind("/a/abc/b/123", &mut path).unwrap();

    assert_eq!(
        path,
        MyPath {
            a: "abc".to_string(),
            b: 123,
            c: 9.5,
            d: true,
        }
    );
}

#[test]
fn test_bind_bad_type() {
    let template = Template::new(ABCD);
    let mut path = MyPath::default();

    let err = template.bind("/a/abc/b/xyz", &mut path).unwrap_err();

    let source = "xyz".parse::<i32>().unwrap_err();
    assert_eq!(
        err,
        BindError::Coercion {
            field: "b",
            value: "xyz".to_string(),
            type_name: "i32",
            source: CoercionError::Int(source),
        }
    );
    assert_eq!(err.field(), Some("b"));

    // Fields before the failure stay bound
    assert_eq!(path.a, "abc");
    assert_eq!(path.b, 0);
}

#[test]
fn test_bind_stops_at_first_failure() {
    let template = Template::new(ABCD);
    let mut path = MyPath::default();

    let err = template
        .bind("/a/abc/b/nope/c/3.5/d/true", &mut path)
        .unwrap_err();

    assert_eq!(err.field(), Some("b"));
    assert_eq!(path.c, 0.0);
    assert!(!path.d);
}

#[test]
fn test_bind_bad_bool() {
    let template = Template::new(ABCD);
    let mut path = MyPath::default();

    let err = template
        .bind("/a/abc/b/1/c/1.5/d/maybe", &mut path)
        .unwrap_err();

    assert!(matches!(
        err,
        BindError::Coercion {
            field: "d",
            source: CoercionError::Bool(_),
            ..
        }
    ));
    assert_eq!(path.c, 1.5);
}

#[test]
fn test_bind_static_mismatch() {
    let template = Template::new(ABCD);
    let mut path = MyPath::default();

    let err = template.bind("/a/abc/x/123", &mut path).unwrap_err();

    match err {
        BindError::Mismatch(mismatch) => {
            assert_eq!(mismatch.expected, "b");
            assert_eq!(mismatch.actual, "x");
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
    assert_eq!(path, MyPath::default());
}

#[derive(Debug, Default, PathRecord)]
pub struct Widths {
    #[pathfmt]
    pub tiny: i8,
    #[pathfmt]
    pub small: u16,
    #[pathfmt]
    pub big: i64,
    #[pathfmt]
    pub size: usize,
    #[pathfmt]
    pub ratio: f32,
}

#[test]
fn test_bind_radix_prefixes_and_widths() {
    let template = Template::new("/{tiny}/{small}/{big}/{size}/{ratio}");
    let widths: Widths = template.extract("/-0x80/0o17/0b11/42/0.5").unwrap();

    assert_eq!(widths.tiny, -128);
    assert_eq!(widths.small, 15);
    assert_eq!(widths.big, 3);
    assert_eq!(widths.size, 42);
    assert_eq!(widths.ratio, 0.5);
}

#[rstest]
#[case::signed_overflow("/128/0/0/0/0", "tiny")]
#[case::negative_unsigned("/0/-1/0/0/0", "small")]
#[case::bad_float("/0/0/0/0/half", "ratio")]
fn test_bind_width_failures(#[case] input: &str, #[case] field: &str) {
    let template = Template::new("/{tiny}/{small}/{big}/{size}/{ratio}");
    let err = template.extract::<Widths>(input).unwrap_err();
    assert_eq!(err.field(), Some(field));
}

#[derive(Debug, Default, PathRecord)]
pub struct Private {
    #[pathfmt("id")]
    pub id: u32,
    #[pathfmt("secret")]
    secret: String,
}

#[test]
fn test_bind_private_tagged_field_is_inaccessible() {
    let template = Template::new("/{id}/{secret}");
    let mut record = Private::default();

    let err = template.bind("/7/hidden", &mut record).unwrap_err();

    assert_eq!(
        err,
        BindError::InaccessibleField {
            field: "secret",
            tag: "secret",
        }
    );
    assert_eq!(record.id, 7);
    assert_eq!(record.secret, "");
}

#[test]
fn test_bind_private_field_fails_even_without_value() {
    let template = Template::new("/{id}");
    let mut record = Private::default();

    let err = template.bind("/7", &mut record).unwrap_err();
    assert_eq!(err.field(), Some("secret"));
}

#[derive(Debug, Default, PathRecord)]
pub struct Mixed {
    #[pathfmt("id")]
    pub id: u32,
    #[pathfmt("tags")]
    pub tags: Vec<String>,
    #[pathfmt("maybe")]
    pub maybe: Option<i32>,
    pub untagged: String,
    cache: Option<String>,
}

#[test]
fn test_bind_skips_unsupported_and_untagged_fields() {
    let template = Template::new("/{id}/{tags}/{maybe}/{untagged}");
    let mut record = Mixed::default();

    template.bind("/5/a,b/3/value", &mut record).unwrap();

    assert_eq!(record.id, 5);
    assert!(record.tags.is_empty());
    assert_eq!(record.maybe, None);
    assert_eq!(record.untagged, "");
    assert_eq!(record.cache, None);
}

#[test]
fn test_bind_params_directly() {
    let mut params = PathParams::new();
    params.insert("org_num".to_string(), "0x2A".to_string());

    let mut user = UserIdentifier {
        org_num: 0,
        id: "kept".to_string(),
    };
    pathfmt::bind_params(&params, &mut user).unwrap();

    assert_eq!(user.org_num, 42);
    assert_eq!(user.id, "kept");
}

#[test]
fn test_path_fields_in_declaration_order() {
    let mut record = Mixed::default();
    let names: Vec<&str> = record.path_fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["id", "tags", "maybe", "untagged", "cache"]);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_record() {
    let template = Template::new(ABCD);
    let path = MyPath {
        a: "abc".to_string(),
        b: 123,
        c: 3.14,
        d: true,
    };

    assert_eq!(template.render(&path).unwrap(), "/a/abc/b/123/c/3.14/d/true");
}

#[test]
fn test_render_without_leading_slash() {
    let template = Template::new("organizations/{org_num}/users/{id}");
    let user = UserIdentifier {
        org_num: 5,
        id: "nick".to_string(),
    };

    assert_eq!(template.render(&user).unwrap(), "organizations/5/users/nick");
}

#[test]
fn test_render_keeps_trailing_slash() {
    let template = Template::new("/users/{id}/");
    let user = UserIdentifier {
        org_num: 5,
        id: "nick".to_string(),
    };

    assert_eq!(template.render(&user).unwrap(), "/users/nick/");
}

#[test]
fn test_render_field_not_found() {
    let template = Template::new("/users/{missing}");
    let err = template.render(&UserIdentifier::default()).unwrap_err();

    assert_eq!(
        err,
        RenderError::FieldNotFound {
            variable: "missing".to_string()
        }
    );
}

#[test]
fn test_render_unsupported_field() {
    let template = Template::new("/x/{tags}");
    let err = template.render(&Mixed::default()).unwrap_err();

    assert_eq!(
        err,
        RenderError::UnsupportedField {
            variable: "tags".to_string(),
            field: "tags",
        }
    );
}

#[test]
fn test_render_reads_private_fields() {
    let template = Template::new("/{id}/{secret}");
    let record = Private {
        id: 1,
        secret: "s".to_string(),
    };

    assert_eq!(template.render(&record).unwrap(), "/1/s");
}

#[test]
fn test_render_params() {
    let template = Template::new("/items/{id}/subitems/{subid}");
    let params = template.to_map("/items/1/subitems/2").unwrap();

    assert_eq!(
        template.render_params(&params).unwrap(),
        "/items/1/subitems/2"
    );

    let mut partial = params.clone();
    partial.remove("subid");
    assert_eq!(
        template.render_params(&partial),
        Err(RenderError::FieldNotFound {
            variable: "subid".to_string()
        })
    );
}

// ============================================================================
// Round trips
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, PathRecord)]
pub struct Coordinates {
    #[pathfmt]
    pub name: String,
    #[pathfmt]
    pub x: i64,
    #[pathfmt]
    pub y: u8,
    #[pathfmt]
    pub scale: f64,
    #[pathfmt]
    pub visible: bool,
}

#[rstest]
#[case(Coordinates { name: "home".to_string(), x: -5, y: 255, scale: 0.25, visible: true })]
#[case(Coordinates { name: String::new(), x: 0, y: 0, scale: 1e-3, visible: false })]
#[case(Coordinates { name: "a.b-c".to_string(), x: i64::MAX, y: 7, scale: 100.0, visible: true })]
fn test_render_then_match_round_trip(#[case] source: Coordinates) {
    let template = Template::new("/{name}/{x}/{y}/{scale}/{visible}");

    let path = template.render(&source).unwrap();
    let restored: Coordinates = template.extract(&path).unwrap();

    assert_eq!(restored, source);
}

#[test]
fn test_bind_with_tracing_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let template = Template::new(ABCD);
    let mut path = MyPath::default();
    assert!(template.bind("/a/abc/b/oops", &mut path).is_err());
    assert!(template.bind("/a/abc", &mut path).is_ok());
}

#[test]
fn test_errors_compose_with_anyhow() -> anyhow::Result<()> {
    let template: Template = "/organizations/{org_num}/users/{id}".parse()?;
    let user: UserIdentifier = template.extract("/organizations/1/users/u")?;
    assert_eq!(user.org_num, 1);

    let err = template
        .extract::<UserIdentifier>("/organizations/x/users/u")
        .map_err(anyhow::Error::from)
        .unwrap_err();
    assert!(err.chain().count() >= 2);
    Ok(())
}
