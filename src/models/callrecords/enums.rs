use strum::{Display, EnumString};

/// Codec negotiated for an audio stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum AudioCodec {
    Unknown,
    Invalid,
    Cn,
    Pcma,
    Pcmu,
    AmrWide,
    #[strum(serialize = "g722")]
    G722,
    #[strum(serialize = "g7221")]
    G7221,
    #[strum(serialize = "g7221c")]
    G7221c,
    #[strum(serialize = "g729")]
    G729,
    MultiChannelAudio,
    #[strum(serialize = "muchv2")]
    Muchv2,
    Opus,
    Satin,
    SatinFullband,
    #[strum(serialize = "rtAudio8")]
    RtAudio8,
    #[strum(serialize = "rtAudio16")]
    RtAudio16,
    Silk,
    SilkNarrow,
    SilkWide,
    Siren,
    XmsRta,
    UnknownFutureValue,
}

/// Codec negotiated for a video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum VideoCodec {
    Unknown,
    Invalid,
    #[strum(serialize = "av1")]
    Av1,
    #[strum(serialize = "h263")]
    H263,
    #[strum(serialize = "h264")]
    H264,
    #[strum(serialize = "h264s")]
    H264s,
    #[strum(serialize = "h264uc")]
    H264uc,
    #[strum(serialize = "h265")]
    H265,
    #[strum(serialize = "rtvc1")]
    Rtvc1,
    RtVideo,
    #[strum(serialize = "xrtvc1")]
    Xrtvc1,
    UnknownFutureValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum MediaStreamDirection {
    CallerToCallee,
    CalleeToCaller,
}

/// Who reported the duration of a PSTN call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum PstnCallDurationSource {
    Microsoft,
    Operator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_names_keep_digits() {
        assert_eq!(AudioCodec::G7221c.to_string(), "g7221c");
        assert_eq!(AudioCodec::RtAudio16.to_string(), "rtAudio16");
        assert_eq!("satinFullband".parse::<AudioCodec>().unwrap(), AudioCodec::SatinFullband);
        assert_eq!("h264uc".parse::<VideoCodec>().unwrap(), VideoCodec::H264uc);
        assert_eq!(VideoCodec::RtVideo.to_string(), "rtVideo");
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(MediaStreamDirection::CalleeToCaller.to_string(), "calleeToCaller");
        assert!("sideways".parse::<MediaStreamDirection>().is_err());
    }
}
