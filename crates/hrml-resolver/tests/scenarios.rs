//! End-to-end query scenarios, run against both resolution strategies.

use hrml_resolver::{resolve_all, Resolver, Strategy};
use pretty_assertions::assert_eq;

const SAMPLE: &str = r#"<tag1 value = "Hello World">
<tag2 name = "Name1">
</tag2>
<tag3 another="another" final="final">
</tag3>
</tag1>"#;

const STRATEGIES: [Strategy; 2] = [Strategy::TagTree, Strategy::InStream];

fn run(strategy: Strategy, source: &str, queries: &[&str]) -> Vec<String> {
    let resolver = strategy.build(source).unwrap();
    resolve_all(&resolver, queries)
}

#[test]
fn sample_document_scenarios() {
    let queries = [
        "tag1.tag2~name",
        "tag1~name",
        "tag1~value",
        "tag1.tag3~another",
        "tag1.tag4~x",
        "tag1.tag2",
    ];
    let expected = vec![
        r#"tag1.tag2~name="Name1""#,
        "tag1~name not found",
        r#"tag1~value="Hello World""#,
        r#"tag1.tag3~another="another""#,
        "tag1.tag4~x not found",
        "tag1.tag2 not found",
    ];

    for strategy in STRATEGIES {
        assert_eq!(run(strategy, SAMPLE, &queries), expected, "strategy {strategy}");
    }
}

#[test]
fn hackerrank_style_document() {
    let source = r#"<a value = "GoodVal">
<b value = "BadVal" size = "10">
</b>
<c height = "auto">
<d size = "3">
<e strength = "2">
</e>
</d>
</c>
</a>"#;
    let queries = [
        "a~value",
        "b~value",
        "a.b~size",
        "a.b~value",
        "a.b.c~height",
        "a.c~height",
        "a.c.d.e~strength",
        "a.c.d~strength",
        "d~size",
        "a.c.d~size",
    ];
    let expected = vec![
        r#"a~value="GoodVal""#,
        "b~value not found",
        r#"a.b~size="10""#,
        r#"a.b~value="BadVal""#,
        "a.b.c~height not found",
        r#"a.c~height="auto""#,
        r#"a.c.d.e~strength="2""#,
        "a.c.d~strength not found",
        "d~size not found",
        r#"a.c.d~size="3""#,
    ];

    for strategy in STRATEGIES {
        assert_eq!(run(strategy, source, &queries), expected, "strategy {strategy}");
    }
}

#[test]
fn strategies_agree_on_accepted_documents() {
    let source = "<root r = \"0\">\n\
                  <left l = \"1\" shared = \"L\">\n\
                  <leaf v = \"a\">\n\
                  </leaf>\n\
                  </left>\n\
                  <right shared = \"R\">\n\
                  <leaf v = \"b\" v = \"c\">\n\
                  </leaf>\n\
                  </right>\n\
                  </root>\n\
                  <second s = \"2\">\n\
                  </second>";
    let queries = [
        "root~r",
        "root.left~shared",
        "root.right~shared",
        "root.left.leaf~v",
        "root.right.leaf~v",
        "root.leaf~v",
        "second~s",
        "second.leaf~v",
        "root.left",
        "root~",
        "",
        "~r",
        "root.~r",
        "root~r.x",
    ];

    let tree = run(Strategy::TagTree, source, &queries);
    let stream = run(Strategy::InStream, source, &queries);
    assert_eq!(tree, stream);
    assert_eq!(tree.len(), queries.len());
    assert_eq!(tree[4], r#"root.right.leaf~v="c""#);
}

#[test]
fn output_keeps_query_order_and_count() {
    let resolver = Strategy::TagTree.build(SAMPLE).unwrap();
    let queries = ["tag1~value", "tag1~value", "nope~x", "tag1~value"];
    let out = resolve_all(&resolver, queries);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], out[1]);
    assert_eq!(out[2], "nope~x not found");
    assert_eq!(out[3], resolver.resolve("tag1~value"));
}

#[test]
fn duplicate_siblings_fail_to_build() {
    let source = "<a>\n<b x = \"1\">\n</b>\n<b x = \"2\">\n</b>\n</a>";
    let err = Strategy::TagTree.build(source).err().unwrap();
    assert_eq!(err.line(), 4);
}
