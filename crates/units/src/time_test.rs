mod tests {
    use approx::assert_relative_eq;

    use crate::constants::{EARTH_DAY, EARTH_YEAR};
    use crate::time::{time_si, Time, TimeUnit};

    #[test]
    fn test_time_si_table() {
        assert_eq!(time_si(0), 1.0);
        assert_eq!(time_si(1), 86_400.0);
        assert_eq!(time_si(2), EARTH_YEAR);
        assert_eq!(time_si(3), 0.0);
        assert_eq!(time_si(-2), 0.0);
    }

    #[test]
    fn test_time_conversions() {
        let year = Time::from_years(1.0);
        assert_relative_eq!(year.to_seconds(), 3.1536e7);
        assert_relative_eq!(year.to_days(), 365.0);

        let days = Time::new(30.0, TimeUnit::EarthDays);
        assert_relative_eq!(days.to_seconds(), 30.0 * EARTH_DAY);

        let sum = Time::from_days(10.0) + Time::from_days(5.0);
        assert_relative_eq!(sum.to_days(), 15.0);
    }

    #[test]
    fn test_rotation_period_to_angular_velocity() {
        let day = Time::from_days(1.0);
        let omega = day.angular_velocity_of_period().unwrap();
        assert_relative_eq!(omega, 2.0 * std::f64::consts::PI / 86_400.0);

        assert_eq!(Time::zero().angular_velocity_of_period(), None);
        assert_eq!(Time::from_days(-1.0).angular_velocity_of_period(), None);
        assert_eq!(Time::from_seconds(f64::INFINITY).angular_velocity_of_period(), None);
    }

    #[test]
    fn test_time_unit_default_is_seconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Seconds);
    }

    #[test]
    fn test_time_unit_parse() {
        assert_eq!("yr".parse::<TimeUnit>(), Ok(TimeUnit::EarthYears));
        assert_eq!("earth_days".parse::<TimeUnit>(), Ok(TimeUnit::EarthDays));
        assert!("fortnights".parse::<TimeUnit>().is_err());
    }
}
