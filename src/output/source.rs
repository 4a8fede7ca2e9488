use crate::generate::TestStub;

/// Render one five-line test block, trailing separator line included.
pub(super) fn render_stub(stub: &TestStub, helper: &str) -> String {
    format!(
        "#[test]\nfn {}() {{\n    {helper}(\"{}\")\n}}\n\n",
        stub.name, stub.path
    )
}

/// Render the whole suite, one block per stub in input order.
pub(crate) fn render_suite(stubs: &[TestStub], helper: &str) -> String {
    let mut out = String::new();
    for stub in stubs {
        out.push_str(&render_stub(stub, helper));
    }
    out
}
