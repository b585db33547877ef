use omap::parsers::native::NativeParser;
use omap::parsers::ImportParser;

#[test]
fn native_parser_extracts_include_targets() {
    let code = r#"
#include <stdio.h>
#include "include/foo.h"
#include  "core\ring_buffer.hpp"
#define NOT_AN_INCLUDE "bar.h"
// #include "commented/still_counts.h"
int main() { return 0; }
"#;

    let targets = NativeParser::new().extract_targets(code);
    assert_eq!(
        targets,
        vec![
            "stdio.h",
            "include/foo.h",
            "core/ring_buffer.hpp",
            "commented/still_counts.h"
        ]
    );
}

#[test]
fn macro_includes_are_ignored() {
    let targets = NativeParser::new().extract_targets("#include HEADER_NAME\n");
    assert!(targets.is_empty());
}
