//! Shared configuration and CloudFormation wire types

pub mod config;
pub mod models;
