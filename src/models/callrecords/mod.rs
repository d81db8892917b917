//! Teams call record models

pub mod direct_routing_log_row;
pub mod enums;
pub mod media_stream;
pub mod pstn_call_log_row;

pub use direct_routing_log_row::DirectRoutingLogRow;
pub use enums::{AudioCodec, MediaStreamDirection, PstnCallDurationSource, VideoCodec};
pub use media_stream::MediaStream;
pub use pstn_call_log_row::PstnCallLogRow;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::{from_json_value, to_json_value};
    use crate::serialization::{FieldDeserializable, IsoDuration, Parsable};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_media_stream_decode() {
        let value = json!({
            "streamId": "1504545584",
            "streamDirection": "callerToCallee",
            "audioCodec": "satin",
            "averageJitter": "PT0.016S",
            "maxRoundTripTime": "PT1.5S",
            "averageBandwidthEstimate": 9965083,
            "averagePacketLossRate": 0.25,
            "wasMediaBypassed": false,
            "startDateTime": "2024-02-01T10:00:00Z",
            "videoCodec": "h264uc"
        });
        let stream: MediaStream = from_json_value(&value).unwrap();

        assert_eq!(stream.stream_direction().unwrap(), Some(MediaStreamDirection::CallerToCallee));
        assert_eq!(stream.audio_codec().unwrap(), Some(AudioCodec::Satin));
        assert_eq!(stream.video_codec().unwrap(), Some(VideoCodec::H264uc));
        assert_eq!(
            stream.average_jitter().unwrap(),
            Some(IsoDuration::from_seconds(0).with_nanoseconds(16_000_000))
        );
        assert_eq!(stream.average_bandwidth_estimate().unwrap(), Some(9_965_083));
        assert_eq!(stream.average_packet_loss_rate().unwrap(), Some(0.25));
        assert_eq!(stream.was_media_bypassed().unwrap(), Some(false));
        assert_eq!(
            stream.start_date_time().unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_media_stream_encode() {
        let mut stream = MediaStream::new();
        stream.set_stream_id(Some("s1".to_string())).unwrap();
        stream.set_average_jitter(Some(IsoDuration::from_seconds(2))).unwrap();
        stream.set_low_frame_rate_ratio(Some(0.5)).unwrap();
        stream.set_audio_codec(Some(AudioCodec::G722)).unwrap();

        let value = to_json_value(&stream).unwrap();
        assert_eq!(
            value,
            json!({
                "audioCodec": "g722",
                "averageJitter": "PT2S",
                "lowFrameRateRatio": 0.5,
                "streamId": "s1"
            })
        );
    }

    #[test]
    fn test_pstn_row_decode() {
        let value = json!({
            "id": "9c4984c7-6c3c-427d-a30c-bd0b2eacee90",
            "callId": "1835317186_112562680@61.221.3.176",
            "callDurationSource": "microsoft",
            "charge": 0.18,
            "currency": "USD",
            "duration": 36,
            "endDateTime": "2019-11-01T00:00:44.0126624Z",
            "callType": "user_out_conf"
        });
        let row: PstnCallLogRow = from_json_value(&value).unwrap();

        assert_eq!(row.call_duration_source().unwrap(), Some(PstnCallDurationSource::Microsoft));
        assert_eq!(row.charge().unwrap(), Some(0.18));
        assert_eq!(row.duration().unwrap(), Some(36));
        assert!(row.end_date_time().unwrap().is_some());
        assert!(row.additional_data().unwrap().is_empty());
        assert_eq!(PstnCallLogRow::field_deserializers().len(), 24);
    }

    #[test]
    fn test_direct_routing_row_decode() {
        let value = json!({
            "id": "9e8bba57-dc14-533a-a7dd-f0da6575eed1",
            "correlationId": "c485b542-0a3f-4d6b-a9c9-b2ba4fa8d3f7",
            "callEndSubReason": 560486,
            "finalSipCode": 486,
            "finalSipCodePhrase": "Busy Here",
            "duration": 0,
            "mediaBypassEnabled": false,
            "successfulCall": false,
            "failureDateTime": "2019-11-01T00:00:31Z",
            "trunkFullyQualifiedDomainName": "sbc.contoso.com"
        });
        let row: DirectRoutingLogRow = from_json_value(&value).unwrap();

        assert_eq!(row.call_end_sub_reason().unwrap(), Some(560_486));
        assert_eq!(row.final_sip_code().unwrap(), Some(486));
        assert_eq!(row.successful_call().unwrap(), Some(false));
        assert_eq!(
            row.failure_date_time().unwrap(),
            Some(Utc.with_ymd_and_hms(2019, 11, 1, 0, 0, 31).unwrap())
        );
        assert_eq!(row.end_date_time().unwrap(), None);
        assert!(row.additional_data().unwrap().is_empty());
        assert_eq!(DirectRoutingLogRow::field_deserializers().len(), 22);
    }

    #[test]
    fn test_direct_routing_row_encode_order() {
        let mut row = DirectRoutingLogRow::new();
        row.set_user_id(Some("u1".to_string())).unwrap();
        row.set_callee_number(Some("+15550100".to_string())).unwrap();
        row.set_call_end_sub_reason(Some(0)).unwrap();
        row.set_media_bypass_enabled(Some(true)).unwrap();

        let keys: Vec<String> = to_json_value(&row)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["calleeNumber", "callEndSubReason", "mediaBypassEnabled", "userId"]);
    }
}
