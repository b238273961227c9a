#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub fn asc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_asc"))
}

/// Scratch directory holding fixture documents and an (absent) config file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Config path the CLI is pointed at; only exists once written.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(asc_bin());
        cmd.args(args)
            .env("ASC_CONFIG", self.config_path())
            .env("ASC_LOG", "error")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("failed to execute asc")
    }

    /// Run with `input` on stdin.
    pub fn run_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn asc");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait for asc")
    }
}

pub fn input_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

pub fn assert_success(output: &Output, args: &[&str]) -> String {
    assert!(
        output.status.success(),
        "command failed: asc {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn assert_failure(output: &Output, args: &[&str]) -> String {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit 1: asc {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Non-empty lines of `text`, trailing whitespace removed.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect()
}

pub const GROUPS: &str = r#"{
    "AutoScalingGroups": [
        {
            "AutoScalingGroupName": "web",
            "AutoScalingGroupARN": "arn:aws:autoscaling:eu-west-1:123456789012:autoScalingGroup:1:autoScalingGroupName/web",
            "MinSize": 2, "MaxSize": 16, "DesiredCapacity": 3,
            "LaunchTemplate": {"LaunchTemplateName": "web-lt"},
            "VPCZoneIdentifier": "subnet-0a,subnet-0b",
            "Instances": [
                {"InstanceId": "i-0b2", "InstanceType": "t3.small", "AvailabilityZone": "eu-west-1b", "LifecycleState": "InService", "HealthStatus": "Healthy"},
                {"InstanceId": "i-0a1", "InstanceType": "t3.small", "AvailabilityZone": "eu-west-1a", "LifecycleState": "Pending", "HealthStatus": "Healthy"}
            ],
            "Tags": [{"Key": "Env", "Value": "prod"}]
        },
        {
            "AutoScalingGroupName": "api",
            "AutoScalingGroupARN": "arn:aws:autoscaling:eu-west-1:123456789012:autoScalingGroup:2:autoScalingGroupName/api",
            "MinSize": 1, "MaxSize": 2, "DesiredCapacity": 1,
            "LaunchConfigurationName": "api-lc",
            "Instances": [
                {"InstanceId": "i-0c3", "InstanceType": "t3.micro", "AvailabilityZone": "eu-west-1a", "LifecycleState": "InService", "HealthStatus": "Healthy"}
            ],
            "Tags": [{"Key": "Env", "Value": "staging"}]
        }
    ]
}"#;

pub const VPCS: &str = r#"{
    "Vpcs": [
        {"VpcId": "vpc-10", "State": "available", "CidrBlock": "10.10.0.0/16", "IsDefault": false, "Tags": [{"Key": "Name", "Value": "shared"}]},
        {"VpcId": "vpc-9", "State": "available", "CidrBlock": "172.31.0.0/16", "IsDefault": true}
    ]
}"#;
