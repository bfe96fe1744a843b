/// VilageFcstInfoService endpoints (data.go.kr, service 1360000)
pub const WEATHER_API: &str = "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0";

// Ultra-short-term forecast (hourly issuance)
pub const ULTRA_SRT_FCST: &str = "/getUltraSrtFcst";

// Fixed query parameters
pub const DATA_TYPE: &str = "json";
pub const NUM_OF_ROWS: u32 = 60;
pub const PAGE_NO: u32 = 1;
