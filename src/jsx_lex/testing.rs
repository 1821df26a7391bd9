//! Canonical markup samples for unit tests
//!
//! Tests should lex these shared samples instead of inventing ad-hoc markup,
//! so the whole suite exercises the same dialect surface.

/// Nested markup with indentation, blank lines, text nodes, a self-closing
/// HTML tag and a capitalized component tag.
pub const SAMPLE_NESTED: &str = r#"
    <div>
        salam
        <img/>

      <button id="my_btn">add</button>
      <div>qqejlvzd233</div>
    </div>
    <div><HelloWorld/></div>
"#;

/// A flat form fragment: paired tags and a self-closing input element.
pub const SAMPLE_FORM: &str = r#"
<label htmlFor="username">Username:</label>
<input type="text" id="username" name="username"/>
"#;
