//! Cross-contract payroll workflows; see `tests/`.
