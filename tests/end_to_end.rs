use ftrace_graph::application::{fill_template, ViewUsecase};
use ftrace_graph::infrastructure::{load_template, TraceLoader};
use ftrace_graph::ports::{HtmlRenderer, TextRenderer};
use ftrace_graph::{normalize, parse, render_html, render_text, CallNode, Error, Forest, ParseErrorReason};
use tempfile::tempdir;

const KERNEL_TRACE: &str = "\
# tracer: function_graph
#
# CPU  DURATION                  FUNCTION CALLS
# |     |   |                     |   |   |   |
 1)               |  __x64_sys_openat() {
 1)               |    do_sys_openat2() {
 1)               |      getname() {
 1)               |        getname_flags.part.0() {
 1)   0.412 us    |          kmem_cache_alloc();
 1)   1.085 us    |        }
 1)   1.530 us    |      }
 ------------------------------------------
 1)   0.270 us    |      get_unused_fd_flags();
 1)   5.847 us    |    } /* do_sys_openat2 */
 1)   6.410 us    |  }
 1)   0.198 us    |  fput();
";

#[test]
fn dense_example_parses_and_renders() {
    let forest = parse("a();b(){c();d();}").unwrap();
    assert_eq!(
        forest,
        Forest::new(vec![
            CallNode::leaf("a"),
            CallNode::new("b", vec![CallNode::leaf("c"), CallNode::leaf("d")]),
        ])
    );

    assert_eq!(render_text(&forest, 0).unwrap(), vec!["a", "b", "  c", "  d"]);
    assert_eq!(
        render_html(&forest),
        "<ul><li><a class=\"expand\">a (0)</a><ul></ul></li><li><a class=\"expand\">b (2)</a><ul><li><a class=\"expand\">c (0)</a><ul></ul></li><li><a class=\"expand\">d (0)</a><ul></ul></li></ul></li></ul>"
    );
}

#[test]
fn kernel_trace_renders_as_indented_text() {
    let renderer = TextRenderer::default();
    let out = ViewUsecase::new(&renderer).run(KERNEL_TRACE).unwrap();
    assert_eq!(
        out,
        "\
__x64_sys_openat
  do_sys_openat2
    getname
      getname_flags.part.0
        kmem_cache_alloc
    get_unused_fd_flags
fput
"
    );
}

#[test]
fn kernel_trace_from_file_into_default_template() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace");
    std::fs::write(&path, KERNEL_TRACE).unwrap();

    let raw = TraceLoader::read(&path).unwrap();
    let fragment = ViewUsecase::new(&HtmlRenderer).run(&raw).unwrap();
    let page = fill_template(&load_template(None).unwrap(), &fragment);

    assert!(!page.contains("GRAPH_HTML"));
    assert!(page.contains("<a class=\"expand\">__x64_sys_openat (1)</a>"));
    assert!(page.contains("<a class=\"expand\">do_sys_openat2 (2)</a>"));
    assert!(page.contains("<a class=\"expand\">fput (0)</a><ul></ul>"));
}

#[test]
fn malformed_inputs_are_rejected() {
    assert!(matches!(
        parse("f(){"),
        Err(Error::Parse {
            reason: ParseErrorReason::UnterminatedBlock,
            ..
        })
    ));
    assert!(matches!(
        parse("f()x"),
        Err(Error::Parse {
            reason: ParseErrorReason::UnexpectedTail('x'),
            ..
        })
    ));
    assert!(matches!(
        normalize(["not the marker line"]),
        Err(Error::Format { .. })
    ));
}

#[test]
fn truncated_trace_is_a_parse_error() {
    // Buffer started in the middle of a call: more closes than opens.
    let raw = "# tracer: function_graph\n 0) 1.0 us | }\n 0) | f();\n";
    let renderer = TextRenderer::default();
    let err = ViewUsecase::new(&renderer).load_forest(raw).unwrap_err();
    assert_eq!(
        err,
        Error::Parse {
            offset: 0,
            reason: ParseErrorReason::UnmatchedClose
        }
    );
}
