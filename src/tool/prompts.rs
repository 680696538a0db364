//! Usage prompts attached to the tool definitions.
//!
//! The calling agent runtime shows these to the model verbatim.

pub const SEARCH_USAGE: &str = r#"Minimal code search (least -> most context outputs).

Call: search(pattern, path='.', format='count', glob='', ignore_case=false)

Formats:
  1. count   : TOTAL + per-file line counts (top 50). Use first for breadth & prioritization.
  2. lines   : file:line:code (cap 200). Enumerate occurrences / plan edits.
  3. context : 5 lines before/after (cap 50 blocks). Understand semantics without full files.
  4. full    : Up to 10 whole files (size caps). Only for imminent multi-line refactor after narrowing.

Escalate only if prior format insufficient. Refine with glob before escalating if truncated.

Truncation markers explicitly indicate partial results.

Decision quick map:
  Scope sizing -> count
  Need exact line numbers -> lines
  Need local logic -> context
  Need full file bodies -> full

Anti-patterns: jumping straight to full; using context to count occurrences; broad pattern with truncation (refine or add glob first).
"#;

pub const BETTER_GREP_USAGE: &str = r#"Minimal code search (ordered from least to most contextual output).

FORMAT ORDER (always start as early in the list as possible):
    1. count   : Aggregate scope: TOTAL + per-file line-match counts (top 50). Fast breadth view.
    2. lines   : Precise occurrences: file:line:code (cap 200 lines). For enumerating usages or planning edits.
    3. context : Local neighborhoods: 5 lines before/after each match (cap 50 blocks). For semantic understanding pre-change.
    4. full    : Full file bodies (up to 10 files, size caps). Only for imminent multi-line refactors after narrowing scope.

RATIONALE: Each later format strictly adds more surrounding information. Escalate only if the previous format leaves unanswered questions.

FILTERING: Optional `glob` (comma separated, supports **). Use to narrow early: glob="src/**/*.py,tests/**/*.py" | glob="**/service/*.ts" | glob="*.md".
IGNORE CASE: Use ignore_case=true only when mixed case patterns are expected.

TRUNCATION: Explicit bracketed markers indicate partial output (e.g., [truncated file list at 50], [truncated at 200 matches]). If you see one, you may need a narrower glob or a refined pattern.

EXAMPLES:
1. count
     better_grep(pattern="deprecated_func", format="count") ->
         TOTAL:37
         8:src/legacy/adapter.py
         5:src/legacy/mapper.py
         4:tests/test_adapter.py
         ...
     Use to prioritize high-impact files.

2. lines
     better_grep(pattern="foo_bar\(", format="lines") ->
         src/api/router.py:87:self.foo_bar(request)
         src/core/worker.py:142:result = foo_bar(job)
         tests/test_worker.py:55:foo_bar(mock_job)
     Provides line numbers for targeted edits/renames. Truncation ends with [truncated at 200 matches].

3. context
     better_grep(pattern="RETRY_POLICY", format="context") -> snippet blocks:
         FILE: src/config/retry.py
         ---
                 18: MAX_RETRY = 5
         =>  19: RETRY_POLICY = {"max": MAX_RETRY, "backoff": 2}
                 20: DEFAULT_TIMEOUT = 30

         FILE: src/job/runner.py
         ---
                 44: from config.retry import RETRY_POLICY
         =>  45: policy = RETRY_POLICY.copy()
                 46: policy["attempt"] = attempt
     Semantic inspection without full file noise.

4. full
     better_grep(pattern="class ConfigBuilder", format="full", glob="src/config/*.py") ->
         FILE: src/config/builder.py
         ---
         class ConfigBuilder:
                 ...
         [truncated file content at 20000 chars]  # only if large
     Only after count/lines/context clarified scope.

ANTI-PATTERNS:
    - Jumping straight to full.
    - Using context to count matches (use count or lines).
    - Broad pattern + truncation notice: refine pattern or add glob before escalating.

DECISION QUICK MAP:
    Sizing -> count
    Need exact lines -> lines
    Need surrounding logic -> context
    Need whole file(s) for refactor -> full

If earlier format answers the question, DO NOT escalate.
"#;
