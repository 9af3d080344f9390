//! Workspace root package; hosts workspace-level tooling (pre-commit hooks).
