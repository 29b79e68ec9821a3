//! Test fixtures - reusable file contents for stack trees.

/// A backend block that marks a directory as a deployable stack
pub const BACKEND_S3: &str = r#"terraform {
  backend "s3" {
    bucket = "tf-state"
    key    = "stack.tfstate"
    region = "eu-west-1"
  }
}
"#;

/// Terraform without a backend block (a reusable module)
pub const MODULE_MAIN: &str = r#"variable "name" {
  type = string
}

resource "aws_s3_bucket" "this" {
  bucket = var.name
}
"#;

/// Shared boilerplate that stacks copy in
pub const BOILERPLATE_PROVIDERS: &str = r#"provider "aws" {
  region = "eu-west-1"
}
"#;

/// A typical repository layout with dev and prod stacks
pub const STANDARD_STACKS: &[&str] = &[
    "stacks/dev/app-x",
    "stacks/dev/networking",
    "stacks/dev/iam",
    "stacks/prod/app-x",
    "stacks/prod/dns",
    "stacks/prod/networking",
];
