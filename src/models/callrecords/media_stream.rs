//! Quality metrics of one media stream in a call session

use super::{AudioCodec, MediaStreamDirection, VideoCodec};
use crate::models::odata_type_field;
use crate::serialization::{
    FieldDeserializable, FieldDeserializers, IsoDuration, ODATA_TYPE_WIRE_KEY, Parsable,
    ParseNodeExt, SerializationError, SerializationWriter, field,
};
use crate::store::ModelStore;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct MediaStream {
    store: ModelStore,
}

impl MediaStream {
    pub fn new() -> Self {
        Self {
            store: ModelStore::new(),
        }
    }

    store_accessors! {
        audio_codec / set_audio_codec: AudioCodec = "audioCodec";
        /// Average Network Mean Opinion Score degradation
        average_audio_degradation / set_average_audio_degradation: f32 = "averageAudioDegradation";
        average_audio_network_jitter / set_average_audio_network_jitter: IsoDuration = "averageAudioNetworkJitter";
        /// Average estimated bandwidth in bits per second
        average_bandwidth_estimate / set_average_bandwidth_estimate: i64 = "averageBandwidthEstimate";
        average_freeze_duration / set_average_freeze_duration: IsoDuration = "averageFreezeDuration";
        average_jitter / set_average_jitter: IsoDuration = "averageJitter";
        average_packet_loss_rate / set_average_packet_loss_rate: f32 = "averagePacketLossRate";
        average_ratio_of_concealed_samples / set_average_ratio_of_concealed_samples: f32 = "averageRatioOfConcealedSamples";
        average_received_frame_rate / set_average_received_frame_rate: f32 = "averageReceivedFrameRate";
        average_round_trip_time / set_average_round_trip_time: IsoDuration = "averageRoundTripTime";
        average_video_frame_loss_percentage / set_average_video_frame_loss_percentage: f32 = "averageVideoFrameLossPercentage";
        average_video_frame_rate / set_average_video_frame_rate: f32 = "averageVideoFrameRate";
        average_video_packet_loss_rate / set_average_video_packet_loss_rate: f32 = "averageVideoPacketLossRate";
        end_date_time / set_end_date_time: DateTime<Utc> = "endDateTime";
        is_audio_forward_error_correction_used / set_is_audio_forward_error_correction_used: bool = "isAudioForwardErrorCorrectionUsed";
        low_frame_rate_ratio / set_low_frame_rate_ratio: f32 = "lowFrameRateRatio";
        low_video_processing_capability_ratio / set_low_video_processing_capability_ratio: f32 = "lowVideoProcessingCapabilityRatio";
        max_audio_network_jitter / set_max_audio_network_jitter: IsoDuration = "maxAudioNetworkJitter";
        max_jitter / set_max_jitter: IsoDuration = "maxJitter";
        max_packet_loss_rate / set_max_packet_loss_rate: f32 = "maxPacketLossRate";
        max_ratio_of_concealed_samples / set_max_ratio_of_concealed_samples: f32 = "maxRatioOfConcealedSamples";
        max_round_trip_time / set_max_round_trip_time: IsoDuration = "maxRoundTripTime";
        /// Packets sent or received
        packet_utilization / set_packet_utilization: i64 = "packetUtilization";
        post_forward_error_correction_packet_loss_rate / set_post_forward_error_correction_packet_loss_rate: f32 = "postForwardErrorCorrectionPacketLossRate";
        /// Root mean square of freeze durations
        rms_freeze_duration / set_rms_freeze_duration: IsoDuration = "rmsFreezeDuration";
        start_date_time / set_start_date_time: DateTime<Utc> = "startDateTime";
        stream_direction / set_stream_direction: MediaStreamDirection = "streamDirection";
        stream_id / set_stream_id: String = "streamId";
        video_codec / set_video_codec: VideoCodec = "videoCodec";
        /// True when media bypassed the media relay
        was_media_bypassed / set_was_media_bypassed: bool = "wasMediaBypassed";
    }

    pub fn write_fields(
        &self,
        writer: &mut dyn SerializationWriter,
    ) -> Result<(), SerializationError> {
        writer.write_enum_value(
            "audioCodec",
            self.audio_codec()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_float32_value("averageAudioDegradation", self.average_audio_degradation()?)?;
        writer.write_iso_duration_value(
            "averageAudioNetworkJitter",
            self.average_audio_network_jitter()?,
        )?;
        writer.write_int64_value("averageBandwidthEstimate", self.average_bandwidth_estimate()?)?;
        writer.write_iso_duration_value("averageFreezeDuration", self.average_freeze_duration()?)?;
        writer.write_iso_duration_value("averageJitter", self.average_jitter()?)?;
        writer.write_float32_value("averagePacketLossRate", self.average_packet_loss_rate()?)?;
        writer.write_float32_value(
            "averageRatioOfConcealedSamples",
            self.average_ratio_of_concealed_samples()?,
        )?;
        writer.write_float32_value("averageReceivedFrameRate", self.average_received_frame_rate()?)?;
        writer.write_iso_duration_value("averageRoundTripTime", self.average_round_trip_time()?)?;
        writer.write_float32_value(
            "averageVideoFrameLossPercentage",
            self.average_video_frame_loss_percentage()?,
        )?;
        writer.write_float32_value("averageVideoFrameRate", self.average_video_frame_rate()?)?;
        writer.write_float32_value(
            "averageVideoPacketLossRate",
            self.average_video_packet_loss_rate()?,
        )?;
        writer.write_time_value("endDateTime", self.end_date_time()?)?;
        writer.write_bool_value(
            "isAudioForwardErrorCorrectionUsed",
            self.is_audio_forward_error_correction_used()?,
        )?;
        writer.write_float32_value("lowFrameRateRatio", self.low_frame_rate_ratio()?)?;
        writer.write_float32_value(
            "lowVideoProcessingCapabilityRatio",
            self.low_video_processing_capability_ratio()?,
        )?;
        writer.write_iso_duration_value("maxAudioNetworkJitter", self.max_audio_network_jitter()?)?;
        writer.write_iso_duration_value("maxJitter", self.max_jitter()?)?;
        writer.write_float32_value("maxPacketLossRate", self.max_packet_loss_rate()?)?;
        writer.write_float32_value(
            "maxRatioOfConcealedSamples",
            self.max_ratio_of_concealed_samples()?,
        )?;
        writer.write_iso_duration_value("maxRoundTripTime", self.max_round_trip_time()?)?;
        writer.write_string_value(ODATA_TYPE_WIRE_KEY, self.odata_type()?.as_deref())?;
        writer.write_int64_value("packetUtilization", self.packet_utilization()?)?;
        writer.write_float32_value(
            "postForwardErrorCorrectionPacketLossRate",
            self.post_forward_error_correction_packet_loss_rate()?,
        )?;
        writer.write_iso_duration_value("rmsFreezeDuration", self.rms_freeze_duration()?)?;
        writer.write_time_value("startDateTime", self.start_date_time()?)?;
        writer.write_enum_value(
            "streamDirection",
            self.stream_direction()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_string_value("streamId", self.stream_id()?.as_deref())?;
        writer.write_enum_value(
            "videoCodec",
            self.video_codec()?.map(|v| v.to_string()).as_deref(),
        )?;
        writer.write_bool_value("wasMediaBypassed", self.was_media_bypassed()?)?;
        Ok(())
    }
}

impl FieldDeserializable for MediaStream {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut fields = FieldDeserializers::new();
        fields.insert(
            "audioCodec",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<AudioCodec>()? {
                    m.set_audio_codec(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(
            "averageAudioDegradation",
            field(|m: &mut Self, n| {
                Ok(m.set_average_audio_degradation(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "averageAudioNetworkJitter",
            field(|m: &mut Self, n| {
                Ok(m.set_average_audio_network_jitter(n.get_iso_duration_value()?)?)
            }),
        );
        fields.insert(
            "averageBandwidthEstimate",
            field(|m: &mut Self, n| {
                Ok(m.set_average_bandwidth_estimate(n.get_int64_value()?)?)
            }),
        );
        fields.insert(
            "averageFreezeDuration",
            field(|m: &mut Self, n| {
                Ok(m.set_average_freeze_duration(n.get_iso_duration_value()?)?)
            }),
        );
        fields.insert(
            "averageJitter",
            field(|m: &mut Self, n| Ok(m.set_average_jitter(n.get_iso_duration_value()?)?)),
        );
        fields.insert(
            "averagePacketLossRate",
            field(|m: &mut Self, n| {
                Ok(m.set_average_packet_loss_rate(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "averageRatioOfConcealedSamples",
            field(|m: &mut Self, n| {
                Ok(m.set_average_ratio_of_concealed_samples(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "averageReceivedFrameRate",
            field(|m: &mut Self, n| {
                Ok(m.set_average_received_frame_rate(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "averageRoundTripTime",
            field(|m: &mut Self, n| {
                Ok(m.set_average_round_trip_time(n.get_iso_duration_value()?)?)
            }),
        );
        fields.insert(
            "averageVideoFrameLossPercentage",
            field(|m: &mut Self, n| {
                Ok(m.set_average_video_frame_loss_percentage(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "averageVideoFrameRate",
            field(|m: &mut Self, n| {
                Ok(m.set_average_video_frame_rate(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "averageVideoPacketLossRate",
            field(|m: &mut Self, n| {
                Ok(m.set_average_video_packet_loss_rate(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "endDateTime",
            field(|m: &mut Self, n| Ok(m.set_end_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "isAudioForwardErrorCorrectionUsed",
            field(|m: &mut Self, n| {
                Ok(m.set_is_audio_forward_error_correction_used(n.get_bool_value()?)?)
            }),
        );
        fields.insert(
            "lowFrameRateRatio",
            field(|m: &mut Self, n| Ok(m.set_low_frame_rate_ratio(n.get_float32_value()?)?)),
        );
        fields.insert(
            "lowVideoProcessingCapabilityRatio",
            field(|m: &mut Self, n| {
                Ok(m.set_low_video_processing_capability_ratio(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "maxAudioNetworkJitter",
            field(|m: &mut Self, n| {
                Ok(m.set_max_audio_network_jitter(n.get_iso_duration_value()?)?)
            }),
        );
        fields.insert(
            "maxJitter",
            field(|m: &mut Self, n| Ok(m.set_max_jitter(n.get_iso_duration_value()?)?)),
        );
        fields.insert(
            "maxPacketLossRate",
            field(|m: &mut Self, n| Ok(m.set_max_packet_loss_rate(n.get_float32_value()?)?)),
        );
        fields.insert(
            "maxRatioOfConcealedSamples",
            field(|m: &mut Self, n| {
                Ok(m.set_max_ratio_of_concealed_samples(n.get_float32_value()?)?)
            }),
        );
        fields.insert(
            "maxRoundTripTime",
            field(|m: &mut Self, n| {
                Ok(m.set_max_round_trip_time(n.get_iso_duration_value()?)?)
            }),
        );
        fields.insert(ODATA_TYPE_WIRE_KEY, odata_type_field());
        fields.insert(
            "packetUtilization",
            field(|m: &mut Self, n| Ok(m.set_packet_utilization(n.get_int64_value()?)?)),
        );
        fields.insert(
            "postForwardErrorCorrectionPacketLossRate",
            field(|m: &mut Self, n| {
                Ok(m.set_post_forward_error_correction_packet_loss_rate(
                    n.get_float32_value()?,
                )?)
            }),
        );
        fields.insert(
            "rmsFreezeDuration",
            field(|m: &mut Self, n| {
                Ok(m.set_rms_freeze_duration(n.get_iso_duration_value()?)?)
            }),
        );
        fields.insert(
            "startDateTime",
            field(|m: &mut Self, n| Ok(m.set_start_date_time(n.get_time_value()?)?)),
        );
        fields.insert(
            "streamDirection",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<MediaStreamDirection>()? {
                    m.set_stream_direction(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(
            "streamId",
            field(|m: &mut Self, n| Ok(m.set_stream_id(n.get_string_value()?)?)),
        );
        fields.insert(
            "videoCodec",
            field(|m: &mut Self, n| {
                if let Some(value) = n.get_enum::<VideoCodec>()? {
                    m.set_video_codec(Some(value))?;
                }
                Ok(())
            }),
        );
        fields.insert(
            "wasMediaBypassed",
            field(|m: &mut Self, n| Ok(m.set_was_media_bypassed(n.get_bool_value()?)?)),
        );
        fields
    }
}

impl_parsable!(MediaStream { store: store });
