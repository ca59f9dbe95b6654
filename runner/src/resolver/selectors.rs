/// XPath queries used by the resolvers.
pub struct FormSelectors;

impl FormSelectors {
    /// Anything that may carry caption text. Real forms caption fields with
    /// generic containers as often as with `<label>`.
    pub const LABEL_LIKE: &'static str = "//label | //div | //span | //p";

    pub const INPUT_CAPABLE: &'static str =
        "//input | //textarea | //*[@contenteditable='true' or @contenteditable='']";
}
