use mockall::{Sequence, mock};
use rstest::rstest;
use slider_cmdvel::{
    CommandPublisher, ControlSurface, RosError, SliderPosition, TeleopConfig, VelocityCommand,
    map_velocity,
};
use std::sync::{Arc, Mutex};

mock! {
    pub Publisher {}
    impl CommandPublisher for Publisher {
        fn publish(&self, command: &VelocityCommand) -> Result<(), RosError>;
    }
}

// Publisher that accepts everything and keeps a copy of each command
fn recording_publisher() -> (MockPublisher, Arc<Mutex<Vec<VelocityCommand>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&sent);
    let mut publisher = MockPublisher::new();
    publisher.expect_publish().returning(move |cmd| {
        sink.lock().unwrap().push(*cmd);
        Ok(())
    });
    (publisher, sent)
}

#[rstest]
#[case(50, 0, 0.5, 0.0, "Linear Velocity: 0.50", "Angular Velocity: 0.00")]
#[case(0, -100, 0.0, 1.0, "Linear Velocity: 0.00", "Angular Velocity: 1.00")]
#[case(-25, 40, -0.25, -0.4, "Linear Velocity: -0.25", "Angular Velocity: -0.40")]
fn slider_scenarios(
    #[case] linear: i32,
    #[case] angular: i32,
    #[case] expected_linear: f64,
    #[case] expected_angular: f64,
    #[case] linear_label: &str,
    #[case] angular_label: &str,
) {
    let (publisher, sent) = recording_publisher();
    let mut surface = ControlSurface::new(publisher);

    surface.set_linear(linear);
    surface.set_angular(angular);

    let last = *sent.lock().unwrap().last().unwrap();
    assert_eq!(last.linear, expected_linear);
    assert_eq!(last.angular, expected_angular);
    assert_eq!(surface.linear_label(), linear_label);
    assert_eq!(surface.angular_label(), angular_label);
}

#[test]
fn full_deflection_then_emergency_stop() {
    let (publisher, sent) = recording_publisher();
    let mut surface = ControlSurface::new(publisher);

    surface.set_linear(100);
    let full = surface.set_angular(100).unwrap();
    assert_eq!(full, VelocityCommand { linear: 1.0, angular: -1.0 });

    surface.emergency_stop();

    assert_eq!(surface.linear().raw(), 0);
    assert_eq!(surface.angular().raw(), 0);
    assert_eq!(*sent.lock().unwrap().last().unwrap(), VelocityCommand::STOP);
    assert_eq!(surface.linear_label(), "Linear Velocity: 0.00");
    assert_eq!(surface.angular_label(), "Angular Velocity: 0.00");
}

#[test]
fn repeated_emergency_stop_republishes_zero() {
    let mut seq = Sequence::new();
    let mut publisher = MockPublisher::new();
    publisher
        .expect_publish()
        .withf(|cmd| *cmd == VelocityCommand { linear: 0.3, angular: 0.0 })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    publisher
        .expect_publish()
        .withf(|cmd| *cmd == VelocityCommand::STOP)
        .times(3)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    let mut surface = ControlSurface::new(publisher);

    surface.set_linear(30);
    // linear reset + explicit stop
    surface.emergency_stop();
    // already at rest: explicit stop only
    surface.emergency_stop();

    assert_eq!(surface.linear(), SliderPosition::ZERO);
    assert_eq!(surface.angular(), SliderPosition::ZERO);
}

#[rstest]
fn linear_increase_is_monotonic(#[values(-100, -37, 0, 64, 100)] angular: i32) {
    let (publisher, sent) = recording_publisher();
    let mut surface = ControlSurface::new(publisher);
    surface.set_angular(angular);
    surface.set_linear(SliderPosition::MIN);

    for raw in SliderPosition::MIN + 1..=SliderPosition::MAX {
        surface.set_linear(raw);
    }

    let sent = sent.lock().unwrap();
    let sweep: Vec<_> = sent.iter().skip_while(|c| c.linear != -1.0).collect();
    assert_eq!(sweep.len(), 201);
    for pair in sweep.windows(2) {
        assert!(pair[1].linear > pair[0].linear);
        assert_eq!(pair[1].angular, pair[0].angular);
        assert_eq!(pair[1].angular, -(f64::from(angular) / 100.0));
    }
}

#[test]
fn every_step_publishes_once() {
    let mut publisher = MockPublisher::new();
    publisher.expect_publish().times(10).returning(|_| Ok(()));
    let mut surface = ControlSurface::new(publisher);

    for raw in 1..=5 {
        surface.set_linear(raw);
        surface.set_angular(-raw);
    }
}

#[test]
fn publish_errors_do_not_stop_the_surface() {
    let mut publisher = MockPublisher::new();
    publisher
        .expect_publish()
        .times(3)
        .returning(|_| Err(RosError::PublishError("transport down".to_string())));
    let mut surface = ControlSurface::new(publisher);

    surface.set_linear(80);
    assert_eq!(surface.emergency_stop(), VelocityCommand::STOP);
}

#[test]
fn mapper_matches_published_command() {
    let (publisher, sent) = recording_publisher();
    let mut surface = ControlSurface::new(publisher);

    surface.set_linear(-60);
    surface.set_angular(15);

    assert_eq!(
        *sent.lock().unwrap().last().unwrap(),
        map_velocity(SliderPosition::new(-60), SliderPosition::new(15))
    );
}

#[test]
fn config_round_trips_through_yaml_file() {
    let path = std::env::temp_dir().join(format!("slider_cmdvel_{}.yaml", std::process::id()));
    let config = TeleopConfig {
        topic: "/base/cmd_vel".to_string(),
        qos_depth: 1,
        anonymous: false,
        ..TeleopConfig::default()
    };
    std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

    let loaded = TeleopConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.resolved_node_name(), "velocity_control");
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("slider_cmdvel_does_not_exist.yaml");
    assert_eq!(TeleopConfig::load_or_default(&path).unwrap(), TeleopConfig::default());
    assert!(TeleopConfig::load(&path).is_err());
}
