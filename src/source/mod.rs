pub(crate) mod comment;
pub(crate) mod file;

// Reading a source file happens in two steps: the whole file is loaded into a
// SourceBuffer, then every comment is deleted. Unlike translation phase 3 of the
// C standard, a comment is removed outright rather than replaced by one space,
// so `a/**/b` becomes `ab`. Newlines that end line comments are retained.
